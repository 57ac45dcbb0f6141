//! Tracing/logging initialization.
//!
//! Logs go to stderr so stdout stays free for program output.

use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, for terminals.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat, default_level: &str) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_a_no_op() {
        init(LogFormat::Json, "debug");
        init(LogFormat::Pretty, "info");
        ::tracing::info!("still alive");
    }

    #[test]
    fn default_format_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
