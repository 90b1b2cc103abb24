//! Distance computation over depot-framed routes.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Total travel cost of a route: the sum of the edge costs between
/// consecutive stops, depot endpoints included.
///
/// # Examples
///
/// ```
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::evaluation::route_distance;
/// use vrp_solver::models::{Point, Route};
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
/// );
/// let route = Route::from_interior(vec![1, 2]);
/// assert!((route_distance(&route, &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn route_distance(route: &Route, distances: &DistanceMatrix) -> f64 {
    let stops = route.stops();
    let mut distance = 0.0;
    for w in stops.windows(2) {
        distance += distances.get(w[0], w[1]);
    }
    distance
}

/// Average travel cost per stop of a route, counting the depot endpoints.
///
/// Used by the crossover consolidation pass as its merge criterion.
pub fn route_distance_per_stop(route: &Route, distances: &DistanceMatrix) -> f64 {
    route_distance(route, distances) / route.stops().len() as f64
}

/// Total travel cost across a set of routes.
pub fn routes_distance(routes: &[Route], distances: &DistanceMatrix) -> f64 {
    let mut total = 0.0;
    for route in routes {
        total += route_distance(route, distances);
    }
    total
}
