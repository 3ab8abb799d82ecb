//! Process-wide tracing subscriber setup.

use shopfront_core::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl LogFormat {
    /// Parse `json` or `human`; anything else is JSON.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("human") || value.eq_ignore_ascii_case("pretty") {
            Self::Human
        } else {
            Self::Json
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Default filter directive, used when `RUST_LOG` is unset or invalid.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl From<&LoggingSettings> for LogSettings {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            format: LogFormat::parse(&settings.format),
        }
    }
}

fn filter_for(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times: returns `false` when a subscriber was
/// already installed.
pub fn init(settings: &LogSettings) -> bool {
    let filter = filter_for(settings);

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.is_ok()
}
