//! Built-in reference experiment.
//!
//! Six release heights, three trials each, as measured with the reference
//! launcher. Used when no `--input` file is given.

use crate::domain::Dataset;
use crate::error::Result;

/// Release heights (m).
pub const REFERENCE_HEIGHTS: [f64; 6] = [0.303, 0.363, 0.427, 0.512, 0.634, 0.717];

/// Horizontal distances (m); one row per height, one column per trial.
pub const REFERENCE_TRIALS: [[f64; 3]; 6] = [
    [0.715, 0.725, 0.715],
    [0.805, 0.823, 0.810],
    [0.881, 0.867, 0.873],
    [0.970, 0.996, 0.987],
    [1.034, 1.060, 1.056],
    [1.163, 1.160, 1.145],
];

/// Build the reference dataset.
pub fn reference_dataset() -> Result<Dataset> {
    let trials = REFERENCE_TRIALS.iter().map(|row| row.to_vec()).collect();
    Dataset::from_table(&REFERENCE_HEIGHTS, trials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_dataset_is_six_by_three() {
        let ds = reference_dataset().unwrap();
        assert_eq!(ds.len(), 6);
        assert!(ds.conditions().iter().all(|c| c.trials.len() == 3));
        assert_eq!(ds.heights(), REFERENCE_HEIGHTS.to_vec());
    }
}
