//! Shared pipeline logic used by the CLI and the plot front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! dataset -> per-condition summaries -> velocity fit -> uncertainty bound -> curve samples
//!
//! Every stage receives its inputs explicitly and returns new values.

use tracing::debug;

use crate::data::{max_relative_uncertainty, means, summarize};
use crate::domain::{ConditionSummary, Dataset, FitResult, UncertaintyBound};
use crate::error::Result;
use crate::fit::{CurveSample, FitOptions, fit_velocity, propagate};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub summaries: Vec<ConditionSummary>,
    pub fit: FitResult,
    pub bound: UncertaintyBound,
    /// Measured `(height, mean distance)` pairs, one per condition.
    pub points: Vec<(f64, f64)>,
    /// Sampled `(height, predicted distance)` pairs along the fitted curve.
    pub curve: Vec<(f64, f64)>,
}

/// Execute the full pipeline on `dataset`.
pub fn run_pipeline(dataset: Dataset, opts: &FitOptions, curve_samples: usize) -> Result<RunOutput> {
    // 1) Aggregate trials per condition.
    let summaries = summarize(&dataset)?;
    let max_relative = max_relative_uncertainty(&summaries)?;
    debug!(conditions = summaries.len(), max_relative, "aggregated trials");

    // 2) Fit the launch velocity to the central values.
    let heights = dataset.heights();
    let central = means(&summaries);
    let fit = fit_velocity(&heights, &central, opts)?;

    // 3) Propagate the worst-case relative uncertainty.
    let bound = propagate(&fit, max_relative);

    // 4) Sample the fitted curve for the plot and the export.
    let curve: Vec<(f64, f64)> = CurveSample::new(&heights, &fit, curve_samples)?.collect();
    let points = heights.into_iter().zip(central).collect();

    Ok(RunOutput {
        dataset,
        summaries,
        fit,
        bound,
        points,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference_dataset;
    use crate::error::PipelineError;

    #[test]
    fn reference_experiment_end_to_end() {
        let run = run_pipeline(reference_dataset().unwrap(), &FitOptions::default(), 30).unwrap();

        assert_eq!(run.summaries.len(), 6);
        assert!((run.summaries[0].mean - 0.718_333_333_333_333).abs() < 1e-9);
        assert!((run.summaries[4].mean - 1.05).abs() < 1e-12);

        // Worst condition is the fifth row: 0.016 / 1.05.
        assert!((run.bound.max_relative - 0.016 / 1.05).abs() < 1e-9);

        assert!((2.9..=3.1).contains(&run.fit.velocity), "v = {}", run.fit.velocity);
        assert!((run.fit.velocity - 2.976_800_961_628).abs() < 1e-6);
        assert!((run.bound.absolute - 0.045_360_776_558).abs() < 1e-6);

        assert_eq!(run.points.len(), 6);
        assert_eq!(run.curve.len(), 30);
        assert!((run.curve[0].0 - 0.303 * 0.9).abs() < 1e-12);
        assert!((run.curve[29].0 - 0.717 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn empty_condition_aborts_the_run() {
        let ds = Dataset::from_table(&[0.3, 0.4], vec![vec![0.7], vec![]]).unwrap();
        let err = run_pipeline(ds, &FitOptions::default(), 30).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn equal_heights_abort_the_run() {
        let ds = Dataset::from_table(&[0.5, 0.5], vec![vec![1.0, 1.1], vec![0.9]]).unwrap();
        let err = run_pipeline(ds, &FitOptions::default(), 30).unwrap_err();
        assert!(matches!(err, PipelineError::FitDidNotConverge(_)));
    }
}
