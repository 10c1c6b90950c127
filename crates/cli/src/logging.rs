//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a level is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LOG_LEVEL`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// Install a stderr `fmt` subscriber; stdout stays reserved for command output.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
