//! Domain model types for the vehicle routing solvers.
//!
//! Provides the core abstractions: locations as points, depot-framed routes,
//! route sets partitioning the customer set, and candidate solutions
//! (individuals) with their cached fitness.

mod individual;
mod point;
mod route;

pub use individual::{best_of, Individual, Population};
pub use point::Point;
pub use route::{Route, RouteSet, DEPOT};
