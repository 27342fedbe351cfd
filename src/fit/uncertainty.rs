//! Worst-case propagation of measurement uncertainty onto the fitted velocity.
//!
//! The bound is first order: the fitted velocity is assumed to scale linearly
//! with the dominant relative measurement error, so
//! `δv = max_rel · v`. The regression covariance is not consulted.

use crate::domain::{FitResult, UncertaintyBound};

/// Propagate the dataset-wide maximum relative uncertainty onto `fit`.
pub fn propagate(fit: &FitResult, max_relative: f64) -> UncertaintyBound {
    UncertaintyBound {
        max_relative,
        absolute: max_relative * fit.velocity,
    }
}
