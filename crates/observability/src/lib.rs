//! Tracing and logging (shared setup).

/// Initialize process-wide logging.
///
/// `default_directive` applies when `RUST_LOG` is unset or unparsable.
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
