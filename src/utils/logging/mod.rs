//! Tracing subscriber setup
//!
//! Logs go to stderr so the run summary printed on stdout stays clean.
//! An explicit `--log-level` wins over `RUST_LOG`, which in turn wins over
//! the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{LinkCheckError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `explicit`, then `RUST_LOG`, then the configured level
pub fn build_filter(config: &LoggingConfig, explicit: Option<&str>) -> Result<EnvFilter> {
    if explicit.is_none() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    let level = explicit.unwrap_or(&config.level);
    EnvFilter::try_new(level)
        .map_err(|e| LinkCheckError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig, explicit: Option<&str>) -> Result<()> {
    let filter = build_filter(config, explicit)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| LinkCheckError::Internal(format!("Failed to initialize logging: {}", e)))
}
