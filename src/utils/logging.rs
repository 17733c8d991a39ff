//! Logging initialization for the quiz engine
//!
//! Library code logs through `tracing` macros only; this module provides the
//! subscriber setup for binaries and tests that embed the engine.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call more than
/// once; later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
