//! 2-opt segment reversal.

use crate::distance::DistanceMatrix;
use crate::models::{Individual, Route};

/// Shortest framed route worth scanning; below this no reversal can change
/// the edge set.
const MIN_STOPS_FOR_REVERSAL: usize = 5;

/// Applies, per route, the single most improving interior segment reversal.
///
/// For each route with at least [`MIN_STOPS_FOR_REVERSAL`] framed stops, every
/// interior segment `[start, end]` is scored by the edge delta of reversing
/// it (only the two boundary edges change); the best strictly negative delta
/// is applied. Routes too short to benefit are left untouched.
///
/// Returns `true` if any route changed; the cached distance is recomputed in
/// that case.
pub fn two_opt_improve(individual: &mut Individual, distances: &DistanceMatrix) -> bool {
    let mut improved = false;
    for route in individual.routes_mut() {
        if route.stops().len() < MIN_STOPS_FOR_REVERSAL {
            continue;
        }
        if let Some((start, end)) = best_reversal(route, distances) {
            route.reverse_segment(start, end);
            improved = true;
        }
    }
    if improved {
        individual.update_distance(distances);
    }
    improved
}

/// Finds the interior segment whose reversal removes the most distance, if
/// any strictly improving one exists.
///
/// Reversing `[start, end]` replaces edges `(prev, seg_start)` and
/// `(seg_end, next)` with `(prev, seg_end)` and `(seg_start, next)`; nothing
/// inside the segment changes on a symmetric matrix.
fn best_reversal(route: &Route, distances: &DistanceMatrix) -> Option<(usize, usize)> {
    let stops = route.stops();
    let interior = route.num_stops();

    let mut best = None;
    let mut best_delta = 0.0;
    for start in 0..interior {
        for end in (start + 1)..interior {
            let prev = stops[start];
            let seg_start = stops[start + 1];
            let seg_end = stops[end + 1];
            let next = stops[end + 2];

            let delta = distances.get(prev, seg_end) + distances.get(seg_start, next)
                - distances.get(prev, seg_start)
                - distances.get(seg_end, next);
            if delta < best_delta {
                best_delta = delta;
                best = Some((start, end));
            }
        }
    }
    best
}
