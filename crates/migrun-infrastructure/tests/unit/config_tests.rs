//! Configuration Loader Tests

use std::env;

use migrun_domain::{TypeFilter, VersionTableConfig};
use migrun_infrastructure::config::{AppConfig, ConfigLoader, LoggingConfig};
use migrun_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("migrun.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("MIGRUN_TEST_ABSENT")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.type_filter, TypeFilter::any());
}

#[test]
fn test_load_type_filter_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[type_filter]
namespace = "App.Migrations"
nested_namespaces = true

[version_table]
default_schema = "ops"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("MIGRUN_TEST_TOML")
        .load()
        .unwrap();

    assert_eq!(
        config.type_filter,
        TypeFilter::new("App.Migrations").with_nested_namespaces(true)
    );
    assert_eq!(config.version_table, VersionTableConfig::with_default_schema("ops"));
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_invalid_namespace_is_rejected() {
    let dir = TempDir::new().unwrap();
    for namespace in ["App.", ".App", "App..Migrations", "App Migrations"] {
        let path = write_config(&dir, &format!("[type_filter]\nnamespace = \"{namespace}\"\n"));
        let result = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("MIGRUN_TEST_INVALID")
            .load();
        assert!(result.is_err(), "'{namespace}' should be rejected");
    }
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"chatty\"\n");

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("MIGRUN_TEST_LEVEL")
        .load();
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[type_filter\nnamespace = ");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("MIGRUN_TEST_MALFORMED")
        .load()
        .unwrap_err();
    assert!(matches!(error, migrun_domain::Error::Configuration { .. }));
}

#[test]
fn test_config_save_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let original = AppConfig {
        type_filter: TypeFilter::new("Company.Data").with_nested_namespaces(true),
        version_table: VersionTableConfig::with_default_schema("audit"),
        logging: LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
        },
    };

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("MIGRUN_TEST_SAVE");
    loader.save_to_file(&original, &path).unwrap();

    assert_eq!(loader.load().unwrap(), original);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

/// Verify nested keys are read from `MIGRUN__`-style variables
///
/// Run with: `cargo test -p migrun-infrastructure --test unit config_tests -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_vars_override_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[type_filter]\nnamespace = \"App\"\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("MIGRUN_TEST_ENV__TYPE_FILTER__NAMESPACE", "App.Migrations");
        env::set_var("MIGRUN_TEST_ENV__TYPE_FILTER__NESTED_NAMESPACES", "true");
    }

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("MIGRUN_TEST_ENV")
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("MIGRUN_TEST_ENV__TYPE_FILTER__NAMESPACE");
        env::remove_var("MIGRUN_TEST_ENV__TYPE_FILTER__NESTED_NAMESPACES");
    }

    let config = config.unwrap();
    assert_eq!(config.type_filter.namespace, "App.Migrations");
    assert!(config.type_filter.nested_namespaces);
}
