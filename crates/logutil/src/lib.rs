//! Utilities for logging.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initialize the global tracing subscriber, honoring `RUST_LOG` when set.
pub fn init(default_level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Initialize a subscriber suitable for tests.
///
/// Safe to call from multiple tests; only the first call installs the
/// subscriber.
pub fn init_for_tests() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
