//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the experiment (built-in or from a file)
//! - runs the aggregation + fit pipeline
//! - prints the result line
//! - writes the CSV exports (and optional JSON summary)
//! - shows the plot

use std::io::IsTerminal;

use clap::Parser;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::domain::{InputSource, PlotMode, RunConfig};
use crate::error::AppError;
use crate::fit::FitOptions;
use crate::io::{BEST_FIT_FILE, POINTS_FILE};

pub mod pipeline;

/// Entry point for the `launch` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose);

    let config = run_config_from_args(&cli)?;
    execute(&config)
}

/// Run one batch: load, fit, report, export, plot.
pub fn execute(config: &RunConfig) -> Result<(), AppError> {
    let dataset = match &config.input {
        InputSource::Reference => crate::data::reference_dataset()?,
        InputSource::File(path) => crate::io::load_experiment(path)?,
    };

    let run = pipeline::run_pipeline(dataset, &FitOptions::default(), config.curve_samples)?;

    println!("{}", crate::report::format_result_line(&run.fit, &run.bound));
    if config.verbose {
        println!("{}", crate::report::format_run_summary(&run));
    }

    // Exports are written before plotting so they survive a failed display.
    std::fs::create_dir_all(&config.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output dir '{}': {e}", config.out_dir.display()),
        )
    })?;
    let heights: Vec<f64> = run.points.iter().map(|p| p.0).collect();
    let means: Vec<f64> = run.points.iter().map(|p| p.1).collect();
    crate::io::write_points_csv(&config.out_dir.join(POINTS_FILE), &heights, &means)?;
    crate::io::write_curve_csv(&config.out_dir.join(BEST_FIT_FILE), &run.curve)?;

    if let Some(path) = &config.summary_path {
        crate::io::write_summary_json(path, &run)?;
    }

    match config.plot {
        PlotMode::Off => {}
        PlotMode::Ascii => print_ascii(&run, config),
        PlotMode::Interactive => {
            if std::io::stdout().is_terminal() {
                crate::tui::run(&run)?;
            } else {
                warn!("stdout is not a terminal; printing an ASCII plot instead");
                print_ascii(&run, config);
            }
        }
    }

    info!(velocity = run.fit.velocity, uncertainty = run.bound.absolute, "run complete");
    Ok(())
}

fn print_ascii(run: &pipeline::RunOutput, config: &RunConfig) {
    let plot = crate::plot::render_ascii_plot(&run.points, &run.curve, config.plot_width, config.plot_height);
    println!("{plot}");
}

pub fn run_config_from_args(cli: &Cli) -> Result<RunConfig, AppError> {
    if cli.samples == 0 {
        return Err(AppError::new(3, "--samples must be at least 1."));
    }

    let plot = if cli.no_plot {
        PlotMode::Off
    } else if cli.ascii {
        PlotMode::Ascii
    } else {
        PlotMode::Interactive
    };

    Ok(RunConfig {
        input: cli
            .input
            .clone()
            .map_or(InputSource::Reference, InputSource::File),
        out_dir: cli.out_dir.clone(),
        curve_samples: cli.samples,
        summary_path: cli.summary.clone(),
        plot,
        plot_width: cli.width,
        plot_height: cli.height,
        verbose: cli.verbose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> RunConfig {
        RunConfig {
            out_dir: dir.to_path_buf(),
            plot: PlotMode::Off,
            ..RunConfig::default()
        }
    }

    #[test]
    fn reference_run_writes_both_exports() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.summary_path = Some(dir.path().join("summary.json"));
        execute(&config).unwrap();

        let points = std::fs::read_to_string(dir.path().join(POINTS_FILE)).unwrap();
        let best = std::fs::read_to_string(dir.path().join(BEST_FIT_FILE)).unwrap();
        assert_eq!(points.lines().count(), 6);
        assert_eq!(best.lines().count(), 30);
        assert!(points.lines().all(|l| l.split(',').count() == 2));
        assert!(points.starts_with("3.029999999999999916e-01,"));
        assert!(dir.path().join("summary.json").exists());
    }

    #[test]
    fn file_input_feeds_the_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run.csv");
        std::fs::write(&input, "0.2,0.6,0.61\n0.4,0.85\n0.6,1.05,1.04,1.06\n").unwrap();

        let mut config = config_for(dir.path());
        config.input = InputSource::File(input);
        config.curve_samples = 12;
        execute(&config).unwrap();

        let points = std::fs::read_to_string(dir.path().join(POINTS_FILE)).unwrap();
        let best = std::fs::read_to_string(dir.path().join(BEST_FIT_FILE)).unwrap();
        assert_eq!(points.lines().count(), 3);
        assert_eq!(best.lines().count(), 12);
    }

    #[test]
    fn invalid_input_maps_to_exit_code_3() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run.json");
        std::fs::write(&input, r#"{"heights": [0.2, 0.4], "trials": [[0.6], []]}"#).unwrap();

        let mut config = config_for(dir.path());
        config.input = InputSource::File(input);
        assert_eq!(execute(&config).unwrap_err().exit_code(), 3);
        assert!(!dir.path().join(POINTS_FILE).exists());
    }

    #[test]
    fn degenerate_heights_map_to_exit_code_4() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run.json");
        std::fs::write(&input, r#"{"heights": [0.4, 0.4], "trials": [[0.6], [0.7]]}"#).unwrap();

        let mut config = config_for(dir.path());
        config.input = InputSource::File(input);
        assert_eq!(execute(&config).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn zero_samples_is_rejected() {
        let cli = Cli::try_parse_from(["launch", "--samples", "0"]).unwrap();
        assert!(run_config_from_args(&cli).is_err());
    }

    #[test]
    fn plot_mode_follows_flags() {
        let cli = Cli::try_parse_from(["launch", "--ascii"]).unwrap();
        assert_eq!(run_config_from_args(&cli).unwrap().plot, PlotMode::Ascii);
        let cli = Cli::try_parse_from(["launch", "--no-plot"]).unwrap();
        assert_eq!(run_config_from_args(&cli).unwrap().plot, PlotMode::Off);
        let cli = Cli::try_parse_from(["launch"]).unwrap();
        assert_eq!(run_config_from_args(&cli).unwrap().plot, PlotMode::Interactive);
    }
}
