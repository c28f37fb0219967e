//! Tracing and logging (shared setup).

/// Initialize process-wide tracing/logging from the environment.
///
/// `RUST_LOG` sets the filter (default `info`) and `LIBRIS_LOG_FORMAT`
/// picks `json` (default) or `pretty` output. An unrecognised format falls
/// back to JSON and is reported once logging is up.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, LogFormatError, LOG_FORMAT_VAR};
