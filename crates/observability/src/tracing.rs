//! Tracing/logging initialization.
//!
//! JSON lines with timestamps, filtered by `RUST_LOG` or the caller's
//! default level.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, then `default_directive`, then `info`.
pub fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
