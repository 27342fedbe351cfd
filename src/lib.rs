//! `launch-fit` library crate.
//!
//! The binary (`launch`) is a thin wrapper around this library so that:
//!
//! - the aggregation/fit pipeline is testable without spawning processes
//! - modules are reusable (e.g., other front-ends or notebooks)
//! - code stays easy to navigate

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
