//! Logging setup.
//!
//! Log output goes to stderr so stdout carries only the result line.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// Default filter is `warn`, or `warn,launch_fit=debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,launch_fit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
