//! Input/output helpers.
//!
//! - experiment file ingest (`ingest`)
//! - headerless CSV exports for points and the best-fit curve (`export`)
//! - JSON run summary (`summary`)

pub mod export;
pub mod ingest;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use summary::*;
