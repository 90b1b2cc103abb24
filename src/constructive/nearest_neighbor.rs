//! Nearest-neighbor route construction.

use crate::distance::DistanceMatrix;
use crate::models::{Route, RouteSet, DEPOT};

/// Builds a solution by greedily appending the closest unvisited customer to
/// the active route's last stop (the depot when a route is opened).
///
/// Routes are deliberately closed at half the capacity limit, leaving slack
/// for the genetic operators to grow them later.
///
/// # Examples
///
/// ```
/// use vrp_solver::constructive::nearest_neighbor_routes;
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::models::Point;
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[
///         Point::new(1.0, 0.0),
///         Point::new(2.0, 0.0),
///         Point::new(3.0, 0.0),
///         Point::new(4.0, 0.0),
///     ],
/// );
/// let routes = nearest_neighbor_routes(&dm, 4);
/// assert_eq!(routes[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(routes[1].stops(), &[0, 3, 4, 0]);
/// ```
pub fn nearest_neighbor_routes(distances: &DistanceMatrix, max_route_length: usize) -> RouteSet {
    let num_customers = distances.num_customers();
    let route_limit = (max_route_length / 2).max(1);

    let mut visited = vec![false; num_customers + 1];
    let mut routes: RouteSet = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut remaining = num_customers;

    while remaining > 0 {
        let from = current.last().copied().unwrap_or(DEPOT);

        let mut nearest = None;
        let mut nearest_distance = f64::INFINITY;
        for customer in 1..=num_customers {
            if !visited[customer] && distances.get(from, customer) < nearest_distance {
                nearest_distance = distances.get(from, customer);
                nearest = Some(customer);
            }
        }
        let customer = match nearest {
            Some(c) => c,
            None => break,
        };

        visited[customer] = true;
        remaining -= 1;
        current.push(customer);
        if current.len() >= route_limit {
            routes.push(Route::from_interior(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        routes.push(Route::from_interior(current));
    }
    routes
}
