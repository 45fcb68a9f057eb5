//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Fallback filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info,reqwest=warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVES);
}

/// Like [`init`], with an explicit fallback filter. Used by tests and
/// tooling that want different default verbosity.
pub fn init_with_default(directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives));

    // JSON records with timestamps; overridable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
