//! Experiment file ingest.
//!
//! Two layouts are accepted, chosen by file extension:
//!
//! - `.json`: `{"heights": [..], "trials": [[..], ..]}`
//! - `.csv`: headerless rows `height,trial,trial,...`; rows may carry different
//!   numbers of trials, and trailing empty fields are ignored
//!
//! Ingest is strict: any malformed row aborts the run with its line number.
//! Physical validation (negative heights, empty trial sets) happens when the
//! `Dataset` is built.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::domain::{Dataset, ExperimentFile};
use crate::error::AppError;

/// Load an experiment from a JSON or CSV file.
pub fn load_experiment(path: &Path) -> Result<Dataset, AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let experiment = match ext.as_deref() {
        Some("json") => read_experiment_json(path)?,
        Some("csv") => read_experiment_csv(path)?,
        _ => {
            return Err(AppError::new(
                2,
                format!(
                    "Unsupported experiment file '{}' (expected .json or .csv).",
                    path.display()
                ),
            ));
        }
    };

    debug!(
        path = %path.display(),
        conditions = experiment.heights.len(),
        "loaded experiment"
    );

    Ok(experiment.into_dataset()?)
}

fn open(path: &Path) -> Result<File, AppError> {
    File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open experiment '{}': {e}", path.display())))
}

fn read_experiment_json(path: &Path) -> Result<ExperimentFile, AppError> {
    let file = open(path)?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(3, format!("Invalid experiment JSON '{}': {e}", path.display())))
}

fn read_experiment_csv(path: &Path) -> Result<ExperimentFile, AppError> {
    let file = open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(file);

    let mut heights = Vec::new();
    let mut trials = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| AppError::new(3, format!("CSV parse error: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Trailing commas are tolerated; a blank cell between values is not.
        let fields: Vec<&str> = record.iter().collect();
        let used = fields.iter().rposition(|field| !field.is_empty()).map_or(0, |i| i + 1);

        let values = fields[..used]
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                if field.is_empty() {
                    return Err(AppError::new(
                        3,
                        format!("Line {line}: empty field in column {}", idx + 1),
                    ));
                }
                field.parse::<f64>().map_err(|e| {
                    AppError::new(3, format!("Line {line}: invalid number '{field}': {e}"))
                })
            })
            .collect::<Result<Vec<f64>, AppError>>()?;

        let Some((&height, row)) = values.split_first() else {
            continue;
        };
        heights.push(height);
        trials.push(row.to_vec());
    }

    Ok(ExperimentFile { heights, trials })
}
