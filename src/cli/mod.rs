//! Command-line parsing.
//!
//! Every flag is optional: a bare `launch` fits the built-in reference
//! experiment, writes `points.csv` and `bestFit.csv` to the current directory,
//! and opens the interactive plot.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::DEFAULT_CURVE_SAMPLES;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(name = "launch", version, about = "Fit a horizontal launch speed from measured landing distances")]
pub struct Cli {
    /// Experiment file (.json or .csv). Defaults to the built-in reference data.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory for `points.csv` and `bestFit.csv`.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Number of points sampled along the fitted curve.
    #[arg(long, default_value_t = DEFAULT_CURVE_SAMPLES)]
    pub samples: usize,

    /// Also write a JSON run summary to this path.
    #[arg(long, value_name = "JSON")]
    pub summary: Option<PathBuf>,

    /// Skip plotting.
    #[arg(long, conflicts_with = "ascii")]
    pub no_plot: bool,

    /// Print an ASCII plot instead of opening the interactive view.
    #[arg(long)]
    pub ascii: bool,

    /// ASCII plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// ASCII plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,

    /// Print the per-condition table and enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["launch"]).unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert_eq!(cli.samples, 30);
        assert!(!cli.no_plot && !cli.ascii);
    }

    #[test]
    fn no_plot_conflicts_with_ascii() {
        assert!(Cli::try_parse_from(["launch", "--no-plot", "--ascii"]).is_err());
    }

    #[test]
    fn parses_input_and_outputs() {
        let cli = Cli::try_parse_from([
            "launch", "-i", "run.csv", "-o", "out", "--summary", "s.json", "--samples", "50",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("run.csv")));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert_eq!(cli.summary, Some(PathBuf::from("s.json")));
        assert_eq!(cli.samples, 50);
    }
}
