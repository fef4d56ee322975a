//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem, with plain
//! or JSON output on stderr and a filter that can be overridden through `MIGRUN_LOG`.

use migrun_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails with a configuration error when a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| default_log_filter(level));

    // Layer types differ per format, so each branch initializes on its own
    let initialized = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stderr).try_init()
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stderr).try_init()
    };
    initialized.map_err(|e| Error::configuration_with_source("Logging already initialized", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Filter admitting `level` and above for every target
///
/// Built from the parsed level so aliases such as `warning` are not read as
/// target directives.
pub fn default_log_filter(level: Level) -> EnvFilter {
    EnvFilter::new(level.as_str().to_lowercase())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
