//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{FILTER_ENV, FORMAT_ENV, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging from `RUST_LOG` and `TALLY_LOG_FORMAT`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize tracing/logging from an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    // Configs built by hand skip `from_lookup` validation.
    let (filter, unparsed) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .with_target(true)
            .try_init()
            .is_ok(),
    };

    if installed {
        if let Some(err) = &unparsed {
            ::tracing::warn!("invalid filter `{}`: {err}; using info", config.filter);
        }
        if let Some(rejected) = &config.rejected_filter {
            ::tracing::warn!("{FILTER_ENV}: invalid directive {rejected}; using {}", config.filter);
        }
        if let Some(rejected) = &config.rejected_format {
            ::tracing::warn!("{FORMAT_ENV}: {rejected}; using json");
        }
    }

    installed
}
