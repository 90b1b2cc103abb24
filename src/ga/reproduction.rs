//! Crossover and child construction.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::{route_distance, route_distance_per_stop};
use crate::local_search::two_opt_improve;
use crate::models::{Individual, Route, RouteSet};

use super::mutation::mutate;

/// Route-preserving crossover.
///
/// The first half of the primary (fitter) parent's routes are copied
/// verbatim. Customers they don't cover are collected from the secondary
/// parent's routes in scan order, each route's leftovers forming one fresh
/// route. A consolidation pass then greedily merges route pairs while doing
/// so pays off.
pub fn route_crossover(
    primary: &Individual,
    secondary: &Individual,
    max_route_length: usize,
    distances: &DistanceMatrix,
) -> Individual {
    let mut used = vec![false; distances.size()];
    let mut routes: RouteSet = Vec::new();

    for route in &primary.routes()[..primary.routes().len() / 2] {
        for &customer in route.interior() {
            used[customer] = true;
        }
        routes.push(route.clone());
    }

    for route in secondary.routes() {
        let leftover: Vec<usize> = route
            .interior()
            .iter()
            .copied()
            .filter(|&customer| !used[customer])
            .collect();
        if !leftover.is_empty() {
            for &customer in &leftover {
                used[customer] = true;
            }
            routes.push(Route::from_interior(leftover));
        }
    }

    consolidate_routes(&mut routes, max_route_length, distances);
    Individual::new(routes, distances)
}

/// Merges route pairs while a merge is profitable.
///
/// A pair merges when the combined interior fits capacity and the combined
/// route's per-stop average distance is smaller than the two routes' summed
/// distances. The merged route is appended at the back and the scan restarts
/// from the beginning.
fn consolidate_routes(routes: &mut RouteSet, max_route_length: usize, distances: &DistanceMatrix) {
    let mut i = 0;
    while i + 1 < routes.len() {
        let mut merged = false;
        for j in (i + 1)..routes.len() {
            if routes[i].num_stops() + routes[j].num_stops() > max_route_length {
                continue;
            }
            let separate = route_distance(&routes[i], distances)
                + route_distance(&routes[j], distances);

            let mut combined_interior = routes[i].interior().to_vec();
            combined_interior.extend_from_slice(routes[j].interior());
            let combined = Route::from_interior(combined_interior);

            if route_distance_per_stop(&combined, distances) < separate {
                routes.remove(j);
                routes.remove(i);
                routes.push(combined);
                merged = true;
                break;
            }
        }
        if merged {
            i = 0;
        } else {
            i += 1;
        }
    }
}

/// Builds one child: crossover of the two parents (fitter one primary),
/// mutation, then a 2-opt refinement pass.
pub fn create_child<R: Rng>(
    parents: &[&Individual],
    max_route_length: usize,
    mutation_probability: f64,
    distances: &DistanceMatrix,
    rng: &mut R,
) -> Individual {
    debug_assert_eq!(parents.len(), 2);
    let (primary, secondary) = if parents[0].total_distance() < parents[1].total_distance() {
        (parents[0], parents[1])
    } else {
        (parents[1], parents[0])
    };

    let mut child = route_crossover(primary, secondary, max_route_length, distances);
    mutate(&mut child, mutation_probability, max_route_length, distances, rng);
    two_opt_improve(&mut child, distances);
    child
}
