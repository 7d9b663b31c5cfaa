//! Integration tests for tensile-types.

use tensile_types::constants;
use tensile_types::TensileError;

#[test]
fn error_display() {
    let err = TensileError::InvalidConfiguration("empty vertex buffer".into());
    assert_eq!(err.to_string(), "Invalid configuration: empty vertex buffer");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: TensileError = io.into();
    assert!(matches!(err, TensileError::Io(_)));
}

#[test]
fn defaults_are_positive() {
    assert!(constants::DEFAULT_SPRING_CONSTANT > 0.0);
    assert!(constants::DEFAULT_REST_LENGTH > 0.0);
    assert!(constants::DEFAULT_DAMPING > 0.0 && constants::DEFAULT_DAMPING < 1.0);
    assert!(constants::DEFAULT_DT > 0.0);
}
