//! Per-condition aggregation of repeated trials.
//!
//! Each condition is reduced to its mean plus a worst-case uncertainty: the
//! larger of the two one-sided deviations from the mean (`max - mean` and
//! `mean - min`). This is a max-deviation bound, not a standard error.

use crate::domain::{Condition, ConditionSummary, Dataset};
use crate::error::{PipelineError, Result};

/// Reduce one condition's trials to a `ConditionSummary`.
pub fn summarize_condition(condition: &Condition) -> Result<ConditionSummary> {
    let trials = &condition.trials;
    if trials.is_empty() {
        return Err(PipelineError::invalid(format!(
            "no trials recorded at height {}",
            condition.height
        )));
    }
    if let Some(bad) = trials.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(PipelineError::invalid(format!(
            "trial distance must be a finite value >= 0, got {bad} at height {}",
            condition.height
        )));
    }

    let mean = trials.iter().sum::<f64>() / trials.len() as f64;
    let min = trials.iter().copied().fold(f64::INFINITY, f64::min);
    let max = trials.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if mean == 0.0 {
        return Err(PipelineError::invalid(format!(
            "mean distance is zero at height {}; relative uncertainty is undefined",
            condition.height
        )));
    }

    let abs_uncertainty = (max - mean).max(mean - min);
    Ok(ConditionSummary {
        mean,
        min,
        max,
        abs_uncertainty,
        rel_uncertainty: abs_uncertainty / mean,
    })
}

/// Summarize every condition, preserving dataset order.
pub fn summarize(dataset: &Dataset) -> Result<Vec<ConditionSummary>> {
    dataset.conditions().iter().map(summarize_condition).collect()
}

/// Largest relative uncertainty across all summaries.
pub fn max_relative_uncertainty(summaries: &[ConditionSummary]) -> Result<f64> {
    summaries
        .iter()
        .map(|s| s.rel_uncertainty)
        .reduce(f64::max)
        .ok_or_else(|| PipelineError::invalid("no condition summaries to reduce"))
}

/// Central values in summary order.
pub fn means(summaries: &[ConditionSummary]) -> Vec<f64> {
    summaries.iter().map(|s| s.mean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cond(trials: &[f64]) -> Condition {
        Condition::new(0.5, trials.to_vec()).unwrap()
    }

    #[test]
    fn symmetric_trials_give_half_range() {
        let s = summarize_condition(&cond(&[0.9, 1.0, 1.1])).unwrap();
        assert!((s.mean - 1.0).abs() < 1e-12);
        assert!((s.abs_uncertainty - 0.1).abs() < 1e-12);
        assert!((s.rel_uncertainty - 0.1).abs() < 1e-12);
    }

    #[test]
    fn asymmetric_trials_use_larger_one_sided_deviation() {
        // mean = 0.71833.., max - mean = 0.00667, mean - min = 0.00333
        let s = summarize_condition(&cond(&[0.715, 0.725, 0.715])).unwrap();
        assert!((s.mean - 0.718_333_333_333).abs() < 1e-9);
        assert!((s.abs_uncertainty - (0.725 - s.mean)).abs() < 1e-15);
        assert!(s.abs_uncertainty < s.max - s.min);
    }

    #[test]
    fn single_trial_has_zero_uncertainty() {
        let s = summarize_condition(&cond(&[0.82])).unwrap();
        assert_eq!(s.abs_uncertainty, 0.0);
        assert_eq!(s.rel_uncertainty, 0.0);
        assert_eq!(s.min, s.max);
    }

    #[test]
    fn empty_trials_are_invalid() {
        let err = summarize_condition(&cond(&[])).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn zero_mean_is_invalid() {
        let err = summarize_condition(&cond(&[0.0, 0.0])).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_trial_is_invalid() {
        let err = summarize_condition(&cond(&[1.0, f64::NAN])).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn max_relative_picks_the_worst_condition() {
        let ds = Dataset::from_table(
            &[0.1, 0.2, 0.3],
            vec![vec![1.0, 1.0], vec![0.9, 1.0, 1.1], vec![2.0, 2.1]],
        )
        .unwrap();
        let summaries = summarize(&ds).unwrap();
        assert_eq!(summaries.len(), 3);
        let worst = max_relative_uncertainty(&summaries).unwrap();
        assert!((worst - 0.1).abs() < 1e-12);
    }

    #[test]
    fn max_relative_of_nothing_is_invalid() {
        assert!(matches!(
            max_relative_uncertainty(&[]),
            Err(PipelineError::InvalidInput(_))
        ));
    }

    proptest! {
        #[test]
        fn abs_uncertainty_matches_worst_one_sided_deviation(
            trials in prop::collection::vec(0.01f64..100.0, 1..12)
        ) {
            let s = summarize_condition(&cond(&trials)).unwrap();
            let mean = trials.iter().sum::<f64>() / trials.len() as f64;
            let hi = trials.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let lo = trials.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert!(s.abs_uncertainty >= 0.0);
            prop_assert_eq!(s.abs_uncertainty, (hi - mean).max(mean - lo));
            prop_assert!(s.abs_uncertainty <= hi - lo + 1e-12);
        }
    }
}
