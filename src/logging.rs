// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, level configured through the
// environment.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system.
///
/// # Environment
/// - RUST_LOG: filter expression (default: info),
///   e.g. RUST_LOG=debug or RUST_LOG=ada_management=trace
///
/// # Example
/// ```no_run
/// use ada_management::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialize logging for tests.
///
/// Uses a more verbose level and the test writer; safe to call
/// from multiple tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
