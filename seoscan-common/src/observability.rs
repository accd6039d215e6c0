//! Diagnostic logging for the `seoscan` binary and its tests.
//!
//! Events go to stderr only: stdout carries the report and a run never
//! writes files. Logging is silent unless `RUST_LOG` asks for it, so the
//! console output of a normal run is exactly the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
    /// Emit one JSON object per event instead of text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "off",
            json: false,
        }
    }
}

/// Install the global `tracing` subscriber writing to stderr.
///
/// Returns `false` when a subscriber was already installed; that is never
/// an error, the scan runs either way.
pub fn init_logging(config: LogConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init()
    };
    installed.is_ok()
}
