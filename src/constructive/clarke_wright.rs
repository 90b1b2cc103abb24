//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) estimates, for every
//! customer pair, the distance saved by serving both on one route instead of
//! two depot round-trips:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Pairs are processed in decreasing order of savings. Each pair either opens
//! a new two-stop route, extends an existing route at one of its endpoints,
//! merges two routes end-to-end (reversing one side when needed so the pair
//! becomes adjacent), or is skipped. The maximum interior stop count is never
//! exceeded. Customers left over at the end become singleton routes.
//!
//! Route membership is tracked with flat per-customer arrays (current route
//! index plus an endpoint flag) rather than an object graph; merges reindex
//! the absorbed route's members in place.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::distance::DistanceMatrix;
use crate::models::{Route, RouteSet, DEPOT};

/// The estimated saving from serving customers `i` and `j` on one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// First customer of the pair.
    pub i: usize,
    /// Second customer of the pair.
    pub j: usize,
    /// Saving value, `d(0,i) + d(0,j) - d(i,j)`.
    pub value: f64,
}

impl Saving {
    /// Creates a saving entry.
    pub fn new(i: usize, j: usize, value: f64) -> Self {
        Self { i, j, value }
    }
}

/// Computes the savings list for all unordered customer pairs, sorted by
/// decreasing saving.
///
/// Ties are broken by ascending `i`, then ascending `j`, so the processing
/// order is fully reproducible across runs.
pub fn compute_savings(distances: &DistanceMatrix) -> Vec<Saving> {
    let n = distances.size();
    let num_customers = distances.num_customers();
    let mut savings = Vec::with_capacity(num_customers.saturating_sub(1) * num_customers / 2);

    for i in 1..n {
        for j in (i + 1)..n {
            let value = distances.get(DEPOT, i) + distances.get(DEPOT, j) - distances.get(i, j);
            savings.push(Saving::new(i, j, value));
        }
    }

    savings.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .expect("savings should not be NaN")
            .then_with(|| a.i.cmp(&b.i))
            .then_with(|| a.j.cmp(&b.j))
    });

    savings
}

/// Greedily merges customers into routes by processing a savings list in
/// order.
///
/// Returns the final route set and a progress log holding a depot-framed
/// snapshot of the routes after every successful merge step, plus one final
/// snapshot after leftover customers are backfilled as singleton routes.
///
/// Guarantees for any well-formed input: every customer `1..=num_customers`
/// appears in exactly one route, every route starts and ends at the depot,
/// and no route serves more than `max_route_length` customers.
pub fn process_savings(
    savings: &[Saving],
    num_customers: usize,
    max_route_length: usize,
) -> (RouteSet, Vec<RouteSet>) {
    // Interior-only route storage; cleared slots are never reused, so
    // surviving routes keep their creation order.
    let mut routes: Vec<Vec<usize>> = Vec::new();
    let mut route_of: Vec<Option<usize>> = vec![None; num_customers + 1];
    let mut is_edge_point: Vec<bool> = vec![false; num_customers + 1];
    let mut progress: Vec<RouteSet> = Vec::new();

    for saving in savings {
        let (i, j) = (saving.i, saving.j);

        match (route_of[i], route_of[j]) {
            // Neither customer assigned: open a new two-stop route.
            (None, None) => {
                route_of[i] = Some(routes.len());
                route_of[j] = Some(routes.len());
                routes.push(vec![i, j]);
                is_edge_point[i] = true;
                is_edge_point[j] = true;
                progress.push(snapshot(&routes));
            }
            // One endpoint, one unassigned: extend the route at that end.
            (Some(ri), None) if is_edge_point[i] => {
                if extend_route(&mut routes[ri], max_route_length, i, j) {
                    route_of[j] = Some(ri);
                    is_edge_point[i] = false;
                    is_edge_point[j] = true;
                    progress.push(snapshot(&routes));
                }
            }
            (None, Some(rj)) if is_edge_point[j] => {
                if extend_route(&mut routes[rj], max_route_length, j, i) {
                    route_of[i] = Some(rj);
                    is_edge_point[j] = false;
                    is_edge_point[i] = true;
                    progress.push(snapshot(&routes));
                }
            }
            // Endpoints of two different routes: merge them end-to-end.
            (Some(ri), Some(rj)) if is_edge_point[i] && is_edge_point[j] && ri != rj => {
                if routes[ri].len() + routes[rj].len() <= max_route_length {
                    merge_routes(&mut routes, ri, rj, i, j);
                    for &customer in &routes[ri] {
                        route_of[customer] = Some(ri);
                    }
                    is_edge_point[i] = false;
                    is_edge_point[j] = false;
                    progress.push(snapshot(&routes));
                }
            }
            // Interior points, same route, or capacity conflict: no-op.
            _ => {}
        }
    }

    // Customers with no profitable merge get their own round-trip.
    for customer in 1..=num_customers {
        if route_of[customer].is_none() {
            routes.push(vec![customer]);
        }
    }

    let final_routes = snapshot(&routes);
    progress.push(final_routes.clone());
    (final_routes, progress)
}

/// Appends `newcomer` to whichever end of the route `edge` occupies.
///
/// Returns `false` without touching the route when it is already at capacity.
fn extend_route(
    route: &mut Vec<usize>,
    max_route_length: usize,
    edge: usize,
    newcomer: usize,
) -> bool {
    if route.len() >= max_route_length {
        return false;
    }
    if route[0] == edge {
        route.insert(0, newcomer);
    } else {
        route.push(newcomer);
    }
    true
}

/// Concatenates route `rj` into route `ri`, orienting both sides so that the
/// saving pair (`i` in `ri`, `j` in `rj`) ends up adjacent. Slot `rj` is left
/// empty.
fn merge_routes(routes: &mut [Vec<usize>], ri: usize, rj: usize, i: usize, j: usize) {
    let mut absorbed = std::mem::take(&mut routes[rj]);
    let host = &mut routes[ri];

    let i_at_end = host[host.len() - 1] == i;
    let j_at_start = absorbed[0] == j;

    if i_at_end {
        if !j_at_start {
            absorbed.reverse();
        }
        host.append(&mut absorbed);
    } else {
        // i is at the start of the host, so the absorbed route must end in j.
        if j_at_start {
            absorbed.reverse();
        }
        absorbed.append(host);
        *host = absorbed;
    }
}

/// Depot-framed copy of all non-empty routes, in slot order.
fn snapshot(routes: &[Vec<usize>]) -> RouteSet {
    routes
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| Route::from_interior(r.clone()))
        .collect()
}

/// Constructs a solution with the Clarke-Wright savings algorithm.
///
/// Returns the final routes and the step-by-step progress log (see
/// [`process_savings`]).
///
/// The caller must supply a well-formed matrix (index 0 = depot) and
/// `max_route_length >= 1`.
///
/// # Examples
///
/// ```
/// use vrp_solver::constructive::clarke_wright_solver;
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::models::Point;
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)],
/// );
/// let (routes, progress) = clarke_wright_solver(&dm, 10);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].stops(), &[0, 1, 2, 3, 0]);
/// assert_eq!(progress.last(), Some(&routes));
/// ```
pub fn clarke_wright_solver(
    distances: &DistanceMatrix,
    max_route_length: usize,
) -> (RouteSet, Vec<RouteSet>) {
    if distances.size() <= 1 {
        return (Vec::new(), Vec::new());
    }
    let savings = compute_savings(distances);
    process_savings(&savings, distances.num_customers(), max_route_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn routes_as_stops(routes: &[Route]) -> Vec<Vec<usize>> {
        routes.iter().map(|r| r.stops().to_vec()).collect()
    }

    #[test]
    fn test_process_savings_makes_single_routes() {
        let savings = vec![Saving::new(1, 2, 10.0), Saving::new(3, 4, 9.0)];
        let (routes, _) = process_savings(&savings, 4, 100);
        assert_eq!(
            routes_as_stops(&routes),
            vec![vec![0, 1, 2, 0], vec![0, 3, 4, 0]]
        );
    }

    #[test]
    fn test_process_savings_joins_single_element_to_route() {
        let savings = vec![
            Saving::new(1, 2, 10.0),
            Saving::new(3, 4, 9.0),
            Saving::new(5, 1, 8.0),
            Saving::new(6, 4, 8.0),
        ];
        let (routes, _) = process_savings(&savings, 6, 100);
        assert_eq!(
            routes_as_stops(&routes),
            vec![vec![0, 5, 1, 2, 0], vec![0, 3, 4, 6, 0]]
        );
    }

    #[test]
    fn test_process_savings_joins_routes() {
        let savings = vec![
            Saving::new(1, 2, 10.0),
            Saving::new(3, 4, 9.0),
            Saving::new(2, 3, 8.0),
        ];
        let (routes, _) = process_savings(&savings, 4, 100);
        assert_eq!(routes_as_stops(&routes), vec![vec![0, 1, 2, 3, 4, 0]]);
    }

    #[test]
    fn test_process_savings_extends_two_routes_then_joins_them() {
        let savings = vec![
            Saving::new(1, 2, 10.0),
            Saving::new(3, 2, 9.0),
            Saving::new(1, 4, 8.0),
            Saving::new(5, 6, 7.0),
            Saving::new(7, 6, 6.0),
            Saving::new(7, 4, 5.0),
        ];
        let (routes, _) = process_savings(&savings, 7, 100);
        assert_eq!(
            routes_as_stops(&routes),
            vec![vec![0, 5, 6, 7, 4, 1, 2, 3, 0]]
        );
    }

    #[test]
    fn test_process_savings_fifteen_customer_example() {
        // Savings list produced from 15 random points; pins the merge
        // orientation and slot-ordering conventions.
        let raw: &[(usize, usize, f64)] = &[
            (2, 6, 280.264),
            (3, 14, 274.769),
            (3, 7, 273.273),
            (8, 12, 266.216),
            (10, 13, 250.653),
            (8, 13, 245.774),
            (9, 12, 245.383),
            (5, 9, 243.649),
            (1, 13, 232.455),
            (7, 14, 228.153),
            (1, 15, 206.368),
            (6, 11, 203.126),
            (8, 10, 200.731),
            (2, 11, 197.703),
            (5, 12, 195.931),
            (8, 9, 186.519),
            (6, 14, 185.884),
            (12, 13, 179.619),
            (2, 14, 171.8),
            (1, 3, 159.217),
            (2, 5, 159.007),
            (1, 10, 158.439),
            (13, 15, 157.825),
            (3, 6, 151.291),
            (10, 12, 149.976),
            (11, 14, 149.625),
            (1, 7, 146.216),
            (5, 8, 139.911),
            (2, 3, 136.976),
            (10, 15, 127.844),
            (5, 6, 127.007),
            (6, 7, 121.81),
            (3, 11, 120.902),
            (2, 9, 112.467),
            (9, 13, 109.207),
            (2, 7, 107.476),
            (1, 8, 106.898),
            (3, 15, 103.658),
            (7, 15, 102.463),
            (7, 11, 102.328),
            (1, 14, 100.826),
            (5, 11, 99.1263),
            (9, 10, 96.1487),
            (6, 9, 86.238),
            (8, 15, 82.4222),
            (4, 12, 79.9183),
            (4, 9, 77.0542),
            (4, 8, 74.0972),
            (2, 12, 71.7397),
            (5, 13, 69.6148),
            (4, 5, 68.2484),
            (14, 15, 67.5355),
            (9, 11, 67.2609),
            (5, 10, 63.0542),
            (1, 12, 61.0014),
            (3, 13, 54.6157),
            (4, 10, 53.8217),
            (7, 13, 53.7612),
            (4, 13, 52.3005),
            (6, 12, 50.6683),
            (12, 15, 48.6712),
            (5, 14, 47.6581),
            (11, 12, 38.4954),
            (2, 8, 35.4254),
            (7, 10, 35.3035),
            (3, 10, 33.7446),
            (2, 4, 29.4431),
            (1, 6, 25.6909),
            (3, 5, 25.6486),
            (1, 9, 24.4202),
            (13, 14, 23.2019),
            (9, 14, 22.7716),
            (4, 6, 22.4929),
            (1, 11, 22.1279),
            (6, 8, 21.658),
            (9, 15, 21.1384),
            (4, 11, 19.7941),
            (1, 4, 19.1806),
            (4, 15, 19.0848),
            (5, 7, 17.6915),
            (1, 2, 16.5508),
            (8, 11, 15.9827),
            (6, 15, 15.9036),
            (11, 15, 14.6386),
            (10, 14, 13.2201),
            (2, 15, 9.51055),
            (7, 8, 8.26797),
            (3, 9, 7.93299),
            (1, 5, 7.38836),
            (5, 15, 7.25877),
            (3, 8, 6.34818),
            (12, 14, 5.32776),
            (7, 9, 4.4385),
            (2, 10, 4.4167),
            (4, 14, 3.14491),
            (2, 13, 2.8672),
            (6, 10, 0.985082),
            (10, 11, 0.534217),
            (6, 13, 0.193943),
            (3, 4, 0.184046),
            (7, 12, 0.153177),
            (8, 14, 0.0672766),
            (11, 13, 0.0402312),
            (3, 12, 0.0253871),
            (4, 7, 0.00501565),
        ];
        let savings: Vec<Saving> = raw.iter().map(|&(i, j, v)| Saving::new(i, j, v)).collect();
        let (routes, _) = process_savings(&savings, 15, 100);
        assert_eq!(
            routes_as_stops(&routes),
            vec![vec![0, 4, 5, 9, 12, 8, 13, 10, 1, 15, 7, 3, 14, 2, 6, 11, 0]]
        );
    }

    #[test]
    fn test_process_savings_capacity_makes_singletons() {
        let savings = vec![
            Saving::new(1, 2, 10.0),
            Saving::new(2, 3, 9.0),
            Saving::new(1, 3, 8.0),
        ];
        let (routes, _) = process_savings(&savings, 3, 2);
        // 3 can't join the full route [1, 2]; it becomes a singleton.
        assert_eq!(
            routes_as_stops(&routes),
            vec![vec![0, 1, 2, 0], vec![0, 3, 0]]
        );
    }

    #[test]
    fn test_process_savings_progress_records_each_merge() {
        let savings = vec![
            Saving::new(1, 2, 10.0),
            Saving::new(3, 4, 9.0),
            Saving::new(2, 3, 8.0),
        ];
        let (routes, progress) = process_savings(&savings, 4, 100);
        // Two new routes, one merge, plus the final snapshot.
        assert_eq!(progress.len(), 4);
        assert_eq!(progress[0].len(), 1);
        assert_eq!(progress[1].len(), 2);
        assert_eq!(progress[2].len(), 1);
        assert_eq!(progress.last(), Some(&routes));
    }

    #[test]
    fn test_compute_savings_values_and_order() {
        let dm = DistanceMatrix::from_points(
            &[Point::new(0.0, 0.0)],
            &[Point::new(3.0, 0.0), Point::new(4.0, 0.0)],
        );
        let savings = compute_savings(&dm);
        assert_eq!(savings.len(), 1);
        // s(1,2) = 3 + 4 - 1 = 6
        assert_eq!(savings[0].i, 1);
        assert_eq!(savings[0].j, 2);
        assert!((savings[0].value - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_compute_savings_tie_break() {
        // Symmetric square around the depot: many equal savings.
        let dm = DistanceMatrix::from_points(
            &[Point::new(0.0, 0.0)],
            &[
                Point::new(1.0, 0.0),
                Point::new(-1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(0.0, -1.0),
            ],
        );
        let savings = compute_savings(&dm);
        for w in savings.windows(2) {
            let a = &w[0];
            let b = &w[1];
            assert!(
                a.value > b.value || (a.value == b.value && (a.i, a.j) < (b.i, b.j)),
                "ordering violated between {a:?} and {b:?}"
            );
        }
    }

    #[test]
    fn test_solver_line() {
        let dm = DistanceMatrix::from_points(
            &[Point::new(0.0, 0.0)],
            &[
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0),
            ],
        );
        let (routes, progress) = clarke_wright_solver(&dm, 100);
        assert_eq!(routes_as_stops(&routes), vec![vec![0, 1, 2, 3, 0]]);
        assert_eq!(progress.last(), Some(&routes));
    }

    #[test]
    fn test_solver_capacity_split() {
        let dm = DistanceMatrix::from_points(
            &[Point::new(0.0, 0.0)],
            &[
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(4.0, 0.0),
            ],
        );
        let (routes, _) = clarke_wright_solver(&dm, 2);
        assert!(routes.len() >= 2);
        let mut served: Vec<usize> = routes.iter().flat_map(|r| r.interior().to_vec()).collect();
        served.sort();
        assert_eq!(served, vec![1, 2, 3, 4]);
        for route in &routes {
            assert!(route.num_stops() <= 2);
        }
    }

    #[test]
    fn test_solver_empty() {
        let dm = DistanceMatrix::from_points(&[Point::new(0.0, 0.0)], &[]);
        let (routes, progress) = clarke_wright_solver(&dm, 10);
        assert!(routes.is_empty());
        assert!(progress.is_empty());
    }

    #[test]
    fn test_solver_single_customer() {
        let dm = DistanceMatrix::from_points(&[Point::new(0.0, 0.0)], &[Point::new(5.0, 0.0)]);
        let (routes, _) = clarke_wright_solver(&dm, 10);
        assert_eq!(routes_as_stops(&routes), vec![vec![0, 1, 0]]);
    }
}
