//! Unit tests for domain error types

use migrun_domain::Error;

#[test]
fn test_missing_constructor_error() {
    let error = Error::missing_constructor("App.Migrations.VersionTable", "no default constructor");
    match &error {
        Error::MissingConstructor { type_name, message } => {
            assert_eq!(type_name, "App.Migrations.VersionTable");
            assert_eq!(message, "no default constructor");
        }
        _ => panic!("Expected MissingConstructor error"),
    }
    assert!(error.is_activation_failure());
}

#[test]
fn test_unresolved_dependency_error_display() {
    let error = Error::unresolved_dependency("App.VersionTable", "VersionTableConfig", "unregistered");
    let display_str = error.to_string();
    assert!(display_str.contains("VersionTableConfig"));
    assert!(display_str.contains("App.VersionTable"));
    assert!(error.is_activation_failure());
}

#[test]
fn test_activation_error_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::activation_with_source("App.VersionTable", "constructor failed", io);

    let source = std::error::Error::source(&error).expect("source should be kept");
    assert_eq!(source.to_string(), "disk gone");
}

#[test]
fn test_configuration_error_is_not_activation_failure() {
    let error = Error::configuration("bad namespace");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "bad namespace");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(!error.is_activation_failure());
}

#[test]
fn test_io_error_conversion() {
    let error: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "missing");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}
