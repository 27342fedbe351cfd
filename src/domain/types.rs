//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while aggregating and fitting
//! - exported to CSV/JSON
//! - loaded from experiment files

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// One experimental setting: a release height and its repeated trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Release height (m).
    pub height: f64,
    /// Horizontal distances measured for each trial (m).
    pub trials: Vec<f64>,
}

impl Condition {
    pub fn new(height: f64, trials: Vec<f64>) -> Result<Self> {
        if !height.is_finite() || height < 0.0 {
            return Err(PipelineError::invalid(format!(
                "release height must be a finite value >= 0, got {height}"
            )));
        }
        Ok(Self { height, trials })
    }
}

/// Ordered conditions, one per release height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    conditions: Vec<Condition>,
}

impl Dataset {
    /// Pair a height sequence with a trial table (one row per height).
    pub fn from_table(heights: &[f64], trials: Vec<Vec<f64>>) -> Result<Self> {
        if heights.len() != trials.len() {
            return Err(PipelineError::invalid(format!(
                "{} heights but {} rows of trials",
                heights.len(),
                trials.len()
            )));
        }

        let conditions = heights
            .iter()
            .zip(trials)
            .map(|(&h, row)| Condition::new(h, row))
            .collect::<Result<Vec<_>>>()?;

        Self::new(conditions)
    }

    pub fn new(conditions: Vec<Condition>) -> Result<Self> {
        if conditions.is_empty() {
            return Err(PipelineError::invalid("dataset has no conditions"));
        }
        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn heights(&self) -> Vec<f64> {
        self.conditions.iter().map(|c| c.height).collect()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Always `false`: `new` and `from_table` reject empty datasets.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Central value and worst-case uncertainty of one condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// `max(max - mean, mean - min)`.
    pub abs_uncertainty: f64,
    /// `abs_uncertainty / mean`.
    pub rel_uncertainty: f64,
}

/// Outcome of the velocity regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    /// Fitted initial horizontal velocity (m/s).
    pub velocity: f64,
    /// Regression variance of `velocity` (the 1x1 covariance matrix).
    ///
    /// Kept for downstream consumers; the propagated bound does not use it.
    pub covariance: f64,
    /// Residual sum of squares at the solution.
    pub sse: f64,
    pub iterations: usize,
}

/// Propagated absolute uncertainty of the fitted velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UncertaintyBound {
    /// Largest relative uncertainty across all conditions.
    pub max_relative: f64,
    /// `max_relative * velocity` (m/s).
    pub absolute: f64,
}

/// Where the experiment data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The built-in reference measurements.
    Reference,
    /// A JSON or CSV experiment file.
    File(PathBuf),
}

/// How (and whether) the fitted curve is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    Off,
    /// Interactive terminal chart, falling back to ASCII when stdout is not a tty.
    Interactive,
    Ascii,
}

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub out_dir: PathBuf,
    pub curve_samples: usize,
    pub summary_path: Option<PathBuf>,
    pub plot: PlotMode,
    pub plot_width: usize,
    pub plot_height: usize,
    pub verbose: bool,
}

/// Default number of points in the exported best-fit curve.
pub const DEFAULT_CURVE_SAMPLES: usize = 30;

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Reference,
            out_dir: PathBuf::from("."),
            curve_samples: DEFAULT_CURVE_SAMPLES,
            summary_path: None,
            plot: PlotMode::Interactive,
            plot_width: 80,
            plot_height: 24,
            verbose: false,
        }
    }
}

/// On-disk experiment description (`--input file.json`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperimentFile {
    pub heights: Vec<f64>,
    pub trials: Vec<Vec<f64>>,
}

impl ExperimentFile {
    pub fn into_dataset(self) -> Result<Dataset> {
        Dataset::from_table(&self.heights, self.trials)
    }
}

/// JSON run summary (`--summary file.json`).
#[derive(Debug, Clone, Serialize)]
pub struct SummaryFile {
    pub tool: String,
    pub generated: String,
    pub gravity: f64,
    pub conditions: Vec<ConditionReport>,
    pub fit: FitResult,
    pub uncertainty: UncertaintyBound,
    pub curve: CurveGrid,
}

/// One condition as written to the JSON summary.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionReport {
    pub height: f64,
    pub trials: Vec<f64>,
    #[serde(flatten)]
    pub summary: ConditionSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveGrid {
    pub height: Vec<f64>,
    pub distance: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_mismatched_table() {
        let err = Dataset::from_table(&[0.1, 0.2], vec![vec![1.0]]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn dataset_rejects_negative_height() {
        let err = Dataset::from_table(&[0.1, -0.2], vec![vec![1.0], vec![1.1]]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn dataset_rejects_empty() {
        assert!(matches!(
            Dataset::new(Vec::new()),
            Err(PipelineError::InvalidInput(_))
        ));
        assert!(Dataset::from_table(&[], Vec::new()).is_err());
    }

    #[test]
    fn dataset_keeps_height_order() {
        let ds = Dataset::from_table(&[0.5, 0.1, 0.3], vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        assert_eq!(ds.heights(), vec![0.5, 0.1, 0.3]);
        assert_eq!(ds.conditions()[1].trials, vec![2.0]);
        assert!(!ds.is_empty());
    }
}
