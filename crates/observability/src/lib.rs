//! Tracing and logging setup shared by the binaries.
//!
//! Libraries in this workspace only emit `tracing` events; installing a
//! subscriber is left to whoever owns `main`.

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
