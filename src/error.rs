//! Solver error types.
//!
//! All caller errors are detected up front, before any solving work begins.
//! Each variant carries the offending parameter value so callers can
//! distinguish bad input from an internal bug (the latter is asserted in
//! debug builds and never surfaced as a `SolverError`).

use std::fmt;

/// An error produced by solver entry-point validation or export I/O.
#[derive(Debug)]
pub enum SolverError {
    /// The customer x and y coordinate arrays have different lengths.
    MismatchedCoordinates {
        /// Length of the x-coordinate array.
        x_len: usize,
        /// Length of the y-coordinate array.
        y_len: usize,
    },
    /// Mutation probability outside `[0, 1]`.
    InvalidMutationProbability(f64),
    /// Maximum route length below the solver's minimum.
    MaxRouteLengthTooSmall {
        /// The rejected value.
        value: usize,
        /// The minimum this solver accepts.
        min: usize,
    },
    /// The distance matrix has no rows.
    EmptyDistanceMatrix,
    /// Population size of zero.
    EmptyPopulation,
    /// Failure writing the progress-history export file.
    Io(std::io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::MismatchedCoordinates { x_len, y_len } => write!(
                f,
                "customers_x and customers_y must be the same length, got {x_len} and {y_len}"
            ),
            SolverError::InvalidMutationProbability(p) => {
                write!(f, "mutation probability must be between 0 and 1, got {p}")
            }
            SolverError::MaxRouteLengthTooSmall { value, min } => {
                write!(f, "max route length must be at least {min}, got {value}")
            }
            SolverError::EmptyDistanceMatrix => write!(f, "distance matrix was empty"),
            SolverError::EmptyPopulation => write!(f, "population size must be at least 1"),
            SolverError::Io(e) => write!(f, "failed to export routes: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(e: std::io::Error) -> Self {
        SolverError::Io(e)
    }
}
