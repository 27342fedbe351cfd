//! Measurement data: the built-in reference experiment and trial aggregation.

pub mod reference;
pub mod summary;

pub use reference::*;
pub use summary::*;
