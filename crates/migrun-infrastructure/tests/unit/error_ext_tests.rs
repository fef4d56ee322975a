//! Error extension tests

use migrun_domain::Error;
use migrun_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_io_context() {
    let error = failing_io().io_context("Failed to read migrun.toml").unwrap_err();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read migrun.toml");
            assert_eq!(source.expect("source kept").to_string(), "no such file");
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let error = failing_io().config_context("Bad configuration").unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert_eq!(error.to_string(), "Configuration error: Bad configuration");
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::io::Result<u8> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 7);
}
