//! Velocity fitting and everything derived from the fitted value.
//!
//! Responsibilities:
//!
//! - Levenberg–Marquardt fit of the launch model (`fitter`)
//! - worst-case uncertainty propagation (`uncertainty`)
//! - sampling the fitted curve for plots and exports (`curve`)

pub mod curve;
pub mod fitter;
pub mod uncertainty;

pub use curve::*;
pub use fitter::*;
pub use uncertainty::*;
