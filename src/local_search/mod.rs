//! Local-search refinement operators.

mod two_opt;

pub use two_opt::two_opt_improve;
