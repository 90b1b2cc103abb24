//! Random route construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Route, RouteSet};

/// Interior stops held back from each random route so that later relocation
/// moves have room to insert without immediately violating capacity.
pub const RANDOM_ROUTE_SLACK: usize = 2;

/// Builds a uniformly random solution: shuffle the customers, then chunk the
/// permutation into consecutive routes of
/// `max(max_route_length - RANDOM_ROUTE_SLACK, 1)` stops.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use vrp_solver::constructive::random_routes;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let routes = random_routes(10, 5, &mut rng);
/// let served: usize = routes.iter().map(|r| r.num_stops()).sum();
/// assert_eq!(served, 10);
/// assert!(routes.iter().all(|r| r.num_stops() <= 3));
/// ```
pub fn random_routes<R: Rng>(
    num_customers: usize,
    max_route_length: usize,
    rng: &mut R,
) -> RouteSet {
    let mut customers: Vec<usize> = (1..=num_customers).collect();
    customers.shuffle(rng);

    let chunk = max_route_length.saturating_sub(RANDOM_ROUTE_SLACK).max(1);
    customers
        .chunks(chunk)
        .map(|c| Route::from_interior(c.to_vec()))
        .collect()
}
