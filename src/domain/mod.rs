//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - measurement inputs (`Condition`, `Dataset`, `ExperimentFile`)
//! - derived outputs (`ConditionSummary`, `FitResult`, `UncertaintyBound`)
//! - run configuration (`RunConfig`, `PlotMode`, `InputSource`)

pub mod types;

pub use types::*;
