//! Shared logging setup for the stockroom crates.

/// Subscriber configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide logging.
///
/// Idempotent; calling it again after a subscriber is installed is a no-op,
/// so tests and embedding applications can both call it freely.
pub fn init() {
    tracing::init();
}
