//! Genetic algorithm solver.
//!
//! Generational replacement with tournament selection, route-preserving
//! crossover, relocation mutation, and per-route 2-opt refinement. Seeding
//! strategies range from pure random to cloning the constructive heuristics.

mod config;
mod mutation;
mod reproduction;
mod seeding;
mod selection;
mod solver;

pub use config::{GaConfig, StartingType};
pub use mutation::mutate;
pub use reproduction::{create_child, route_crossover};
pub use seeding::{clarke_wright_individual, nearest_neighbor_individual, seed_population};
pub use selection::select_parents;
pub use solver::genetic_solver;
