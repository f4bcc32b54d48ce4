//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a stderr fmt subscriber. Stdout stays free for the report.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
