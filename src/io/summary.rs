//! JSON run summary.
//!
//! The summary is the "portable" record of a run:
//! - inputs (heights and raw trials)
//! - per-condition aggregates
//! - fit result and propagated uncertainty
//! - the sampled best-fit curve
//!
//! The schema is defined by `domain::SummaryFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::app::pipeline::RunOutput;
use crate::domain::{ConditionReport, CurveGrid, SummaryFile};
use crate::error::AppError;
use crate::models::G;

/// Assemble the summary document for a finished run.
pub fn build_summary(run: &RunOutput) -> SummaryFile {
    let conditions = run
        .dataset
        .conditions()
        .iter()
        .zip(&run.summaries)
        .map(|(c, s)| ConditionReport {
            height: c.height,
            trials: c.trials.clone(),
            summary: *s,
        })
        .collect();

    SummaryFile {
        tool: "launch".to_string(),
        generated: Local::now().to_rfc3339(),
        gravity: G,
        conditions,
        fit: run.fit,
        uncertainty: run.bound,
        curve: CurveGrid {
            height: run.curve.iter().map(|p| p.0).collect(),
            distance: run.curve.iter().map(|p| p.1).collect(),
        },
    }
}

/// Write the run summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &build_summary(run))
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    info!(path = %path.display(), "wrote run summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_pipeline;
    use crate::data::reference_dataset;
    use crate::fit::FitOptions;

    #[test]
    fn summary_round_trips_through_json() {
        let run = run_pipeline(reference_dataset().unwrap(), &FitOptions::default(), 30).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary_json(&path, &run).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["tool"], "launch");
        assert_eq!(value["gravity"], 9.8);
        assert_eq!(value["conditions"].as_array().unwrap().len(), 6);
        assert_eq!(value["conditions"][0]["trials"].as_array().unwrap().len(), 3);
        assert!(value["conditions"][0]["mean"].is_number());
        assert_eq!(value["curve"]["height"].as_array().unwrap().len(), 30);
        let v = value["fit"]["velocity"].as_f64().unwrap();
        assert!((v - run.fit.velocity).abs() < 1e-12);
        assert!(value["uncertainty"]["absolute"].as_f64().unwrap() > 0.0);
    }
}
