//! Distance matrices.
//!
//! Provides a dense travel-cost matrix with forbidden edges marked as
//! positive infinity.

mod matrix;

pub use matrix::DistanceMatrix;
