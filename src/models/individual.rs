//! Candidate solution and population types.

use crate::distance::DistanceMatrix;
use crate::evaluation::routes_distance;

use super::RouteSet;

/// One candidate solution: a set of routes plus its cached total distance.
///
/// The cached distance always equals the sum of the routes' edge costs under
/// the distance matrix it was last evaluated against; every structural change
/// to the routes must be followed by [`update_distance`](Individual::update_distance)
/// before the value is read by selection logic.
///
/// Individuals never share route storage: construction from parents deep
/// copies.
///
/// # Examples
///
/// ```
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::models::{Individual, Point, Route};
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
/// );
/// let ind = Individual::new(vec![Route::from_interior(vec![1, 2])], &dm);
/// // 0→1→2→0 = 1 + 1 + 2
/// assert!((ind.total_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Individual {
    routes: RouteSet,
    total_distance: f64,
}

/// An ordered, fixed-size collection of individuals, fully replaced each
/// generation.
pub type Population = Vec<Individual>;

impl Individual {
    /// Creates an individual from routes, computing and caching its total
    /// distance.
    pub fn new(routes: RouteSet, distances: &DistanceMatrix) -> Self {
        let total_distance = routes_distance(&routes, distances);
        Self {
            routes,
            total_distance,
        }
    }

    /// Returns the routes of this individual.
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    ///
    /// Callers mutating routes must call
    /// [`update_distance`](Individual::update_distance) before the cached
    /// distance is read again.
    pub fn routes_mut(&mut self) -> &mut RouteSet {
        &mut self.routes
    }

    /// Consumes the individual, returning its routes.
    pub fn into_routes(self) -> RouteSet {
        self.routes
    }

    /// Cached total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Recomputes the cached total distance from the current routes.
    pub fn update_distance(&mut self, distances: &DistanceMatrix) {
        self.total_distance = routes_distance(&self.routes, distances);
    }
}

/// Returns the individual with the minimum total distance, or `None` if the
/// population is empty.
pub fn best_of(population: &[Individual]) -> Option<&Individual> {
    population.iter().min_by(|a, b| {
        a.total_distance
            .partial_cmp(&b.total_distance)
            .expect("distance should not be NaN")
    })
}
