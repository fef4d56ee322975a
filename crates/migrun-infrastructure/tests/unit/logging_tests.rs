//! Logging Tests

use migrun_infrastructure::constants::DEFAULT_LOG_LEVEL;
use migrun_infrastructure::logging::{
    LoggingConfig, default_log_filter, init_logging, parse_log_level,
};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        json_format: false,
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_twice_fails_gracefully() {
    let config = LoggingConfig::default();
    // Another test in this binary may have installed a subscriber first
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_warning_alias_filters_at_warn() {
    let level = parse_log_level("warning").unwrap();
    let filter = default_log_filter(level);

    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn test_default_filter_follows_level() {
    assert_eq!(default_log_filter(Level::DEBUG).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(default_log_filter(Level::ERROR).max_level_hint(), Some(LevelFilter::ERROR));
}
