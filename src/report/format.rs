//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::RunOutput;
use crate::domain::{FitResult, UncertaintyBound};

/// The one-line result printed on every run.
pub fn format_result_line(fit: &FitResult, bound: &UncertaintyBound) -> String {
    format!(
        "Muzzle speed is {:.6} plus/minus {:.6} m/s",
        fit.velocity, bound.absolute
    )
}

/// Format the per-condition table and fit diagnostics.
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== launch - horizontal launch speed fit ===\n");
    out.push_str(&format!("Conditions: n={}\n\n", run.summaries.len()));

    out.push_str(
        format!(
            "{:>10} {:>7} {:>10} {:>10} {:>10} {:>10} {:>9}\n",
            "height_m", "trials", "mean_m", "min_m", "max_m", "abs_unc_m", "rel_unc"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<7} {:-<10} {:-<10} {:-<10} {:-<10} {:-<9}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (c, s) in run.dataset.conditions().iter().zip(&run.summaries) {
        out.push_str(&format!(
            "{:>10.3} {:>7} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>9.5}\n",
            c.height,
            c.trials.len(),
            s.mean,
            s.min,
            s.max,
            s.abs_uncertainty,
            s.rel_uncertainty,
        ));
    }

    out.push_str("\nFit diagnostics:\n");
    out.push_str(&format!("- velocity   : {:.6} m/s\n", run.fit.velocity));
    out.push_str(&format!("- covariance : {:.6e}\n", run.fit.covariance));
    out.push_str(&format!("- sse        : {:.6e}\n", run.fit.sse));
    out.push_str(&format!("- iterations : {}\n", run.fit.iterations));
    out.push_str(&format!("- max rel unc: {:.6}\n", run.bound.max_relative));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_pipeline;
    use crate::data::reference_dataset;
    use crate::fit::FitOptions;

    #[test]
    fn result_line_reports_speed_and_bound() {
        let fit = FitResult {
            velocity: 2.9768,
            covariance: 0.0,
            sse: 0.0,
            iterations: 3,
        };
        let bound = UncertaintyBound {
            max_relative: 0.01,
            absolute: 0.029768,
        };
        assert_eq!(
            format_result_line(&fit, &bound),
            "Muzzle speed is 2.976800 plus/minus 0.029768 m/s"
        );
    }

    #[test]
    fn summary_lists_every_condition() {
        let run = run_pipeline(reference_dataset().unwrap(), &FitOptions::default(), 30).unwrap();
        let txt = format_run_summary(&run);
        assert!(txt.contains("Conditions: n=6"));
        assert!(txt.contains("     0.303       3   0.718333"));
        assert!(txt.contains("- iterations :"));
    }
}
