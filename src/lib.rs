//! # vrp-solver
//!
//! Capacitated vehicle routing with two solving strategies: the deterministic
//! Clarke-Wright savings heuristic and a population-based genetic algorithm
//! with route crossover, relocation mutation, and intra-route 2-opt.
//!
//! Both solvers return a *progress history*: the sequence of best-known route
//! sets over the run, suitable for auditing or animation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, Individual)
//! - [`distance`] — Dense distance matrix with forbidden-edge marking
//! - [`evaluation`] — Route distance computation
//! - [`constructive`] — Constructive heuristics (Clarke-Wright, Nearest Neighbor, Random)
//! - [`local_search`] — Intra-route 2-opt improvement
//! - [`ga`] — Genetic algorithm (seeding, selection, reproduction, solver loop)
//! - [`export`] — Progress-history file export
//! - [`api`] — Coordinate-array entry points for both solvers
//!
//! ## Example
//!
//! ```
//! use vrp_solver::api::solve_genetic;
//! use vrp_solver::ga::GaConfig;
//! use vrp_solver::models::Point;
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys = [0.0, 0.0, 0.0, 0.0];
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(20)
//!     .with_seed(7);
//!
//! let progress = solve_genetic(Point::new(0.0, 0.0), &xs, &ys, 3, &config, None).unwrap();
//! let best = progress.last().unwrap();
//! assert!(best.iter().all(|route| route.num_stops() <= 3));
//! ```

pub mod api;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod ga;
pub mod local_search;
pub mod models;

pub use error::SolverError;
