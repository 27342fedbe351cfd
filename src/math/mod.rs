//! Numerical utilities: least squares and sample grids.

pub mod grid;
pub mod ols;

pub use grid::*;
pub use ols::*;
