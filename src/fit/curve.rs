//! Sampled best-fit curve for plotting and export.

use crate::domain::FitResult;
use crate::error::{PipelineError, Result};
use crate::math::{Linspace, linspace};
use crate::models::kinematics::{distance_for_flight_time, flight_time_unchecked};

/// Lower bound of the sampled range relative to the smallest height.
pub const RANGE_LOW: f64 = 0.9;
/// Upper bound of the sampled range relative to the largest height.
pub const RANGE_HIGH: f64 = 1.1;

/// Lazily evaluated `(height, predicted distance)` pairs along the fitted curve.
///
/// Single pass; build a new one to iterate again.
#[derive(Debug, Clone)]
pub struct CurveSample {
    heights: Linspace,
    velocity: f64,
}

impl CurveSample {
    /// `count` heights spanning `[0.9 · min(h), 1.1 · max(h)]`.
    pub fn new(heights: &[f64], fit: &FitResult, count: usize) -> Result<Self> {
        let lo = heights.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if heights.is_empty() || !(lo.is_finite() && hi.is_finite()) || lo < 0.0 {
            return Err(PipelineError::invalid(
                "curve sampling needs finite, non-negative heights",
            ));
        }
        Ok(Self {
            heights: linspace(lo * RANGE_LOW, hi * RANGE_HIGH, count),
            velocity: fit.velocity,
        })
    }
}

impl Iterator for CurveSample {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        let h = self.heights.next()?;
        Some((h, distance_for_flight_time(flight_time_unchecked(h), self.velocity)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heights.size_hint()
    }
}

impl ExactSizeIterator for CurveSample {}
