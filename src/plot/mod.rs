//! Non-interactive plotting.

pub mod ascii;

pub use ascii::*;
