//! Constructive heuristics that build initial solutions from scratch.

mod clarke_wright;
mod nearest_neighbor;
mod random;

pub use clarke_wright::{clarke_wright_solver, compute_savings, process_savings, Saving};
pub use nearest_neighbor::nearest_neighbor_routes;
pub use random::{random_routes, RANDOM_ROUTE_SLACK};
