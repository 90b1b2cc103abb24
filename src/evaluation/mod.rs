//! Route cost evaluation.

mod evaluator;

pub use evaluator::{route_distance, route_distance_per_stop, routes_distance};
