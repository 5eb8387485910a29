//! Subscriber installation for the process.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines to stdout, level filtering via
/// `RUST_LOG` with an `info` default.
///
/// A second call finds the global subscriber already set and does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
