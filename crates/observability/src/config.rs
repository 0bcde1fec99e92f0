use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the log output format.
pub const FORMAT_ENV: &str = "TALLY_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `pretty`)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Logging configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `tally_sales=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when `TALLY_LOG_FORMAT` held a value we could not parse.
    pub rejected_format: Option<UnknownLogFormat>,
    /// Set when `RUST_LOG` held a directive `EnvFilter` rejected; `filter` is then the default.
    pub rejected_filter: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
            rejected_filter: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (filter, rejected_filter) = match lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            None => (DEFAULT_FILTER.to_string(), None),
            Some(raw) => match EnvFilter::try_new(&raw) {
                Ok(_) => (raw, None),
                Err(err) => (DEFAULT_FILTER.to_string(), Some(format!("`{raw}`: {err}"))),
            },
        };

        let (format, rejected_format) = match lookup(FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(err) => (LogFormat::default(), Some(err)),
            },
        };

        Self {
            filter,
            format,
            rejected_format,
            rejected_filter,
        }
    }
}
