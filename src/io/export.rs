//! Export measured points and the sampled best-fit curve to CSV.
//!
//! Both files are headerless `x,y` rows so they can be dropped straight into a
//! spreadsheet or plotting script. Numbers use the NumPy `savetxt` default
//! layout (`%.18e`, two-digit signed exponent), e.g. `3.029999999999999916e-01`.

use std::path::Path;

use tracing::info;

use crate::error::AppError;

/// File name for the measured `(height, mean distance)` rows.
pub const POINTS_FILE: &str = "points.csv";
/// File name for the sampled `(height, predicted distance)` rows.
pub const BEST_FIT_FILE: &str = "bestFit.csv";

/// Write one row per condition: `height,mean_distance`.
pub fn write_points_csv(path: &Path, heights: &[f64], means: &[f64]) -> Result<(), AppError> {
    if heights.len() != means.len() {
        return Err(AppError::new(
            3,
            format!("{} heights but {} central values", heights.len(), means.len()),
        ));
    }
    let rows: Vec<(f64, f64)> = heights.iter().copied().zip(means.iter().copied()).collect();
    write_xy_csv(path, &rows)
}

/// Write the sampled curve: `height,predicted_distance`.
pub fn write_curve_csv(path: &Path, samples: &[(f64, f64)]) -> Result<(), AppError> {
    write_xy_csv(path, samples)
}

fn write_xy_csv(path: &Path, rows: &[(f64, f64)]) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create CSV '{}': {e}", path.display())))?;

    for &(x, y) in rows {
        writer
            .write_record([format_sci(x), format_sci(y)])
            .map_err(|e| AppError::new(2, format!("Failed to write CSV row to '{}': {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV '{}': {e}", path.display())))?;

    info!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

/// Format like C's `%.18e`: 18 fractional digits, exponent with sign and at least two digits.
pub fn format_sci(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{value:.18e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}
