use osc_core::errors::{ErrorInfo, OscError};
use osc_core::PhysicalParameters;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("parameter", "dt")
        .with_context("reason", "example")
}

#[test]
fn invalid_parameter_surface() {
    let err = OscError::InvalidParameter(sample_info("P001", "dt must be positive"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("parameter"));
}

#[test]
fn io_error_surface() {
    let err = OscError::Io(sample_info("IO001", "permission denied"));
    assert_eq!(err.info().code, "IO001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn config_error_surface() {
    let err = OscError::Config(sample_info("CF001", "bad yaml"));
    assert_eq!(err.info().code, "CF001");
}

#[test]
fn serde_error_surface() {
    let err = OscError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn display_includes_context_and_hint() {
    let err = OscError::InvalidParameter(
        ErrorInfo::new("mass-non-positive", "mass must be finite and > 0")
            .with_context("value", "0")
            .with_hint("use a positive mass"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid parameter: mass must be finite and > 0"));
    assert!(rendered.contains("code: mass-non-positive"));
    assert!(rendered.contains("value=0"));
    assert!(rendered.contains("hint: use a positive mass"));
}

#[test]
fn zero_mass_is_rejected_eagerly() {
    let err = PhysicalParameters::new(0.0, 1.0, 0.5).unwrap_err();
    assert!(matches!(err, OscError::InvalidParameter(_)));
    assert_eq!(err.info().code, "mass-non-positive");
    assert_eq!(err.info().context.get("parameter").map(String::as_str), Some("mass"));
}

#[test]
fn negative_and_non_finite_parameters_are_rejected() {
    assert!(PhysicalParameters::new(-1.0, 1.0, 0.5).is_err());
    assert!(PhysicalParameters::new(f64::NAN, 1.0, 0.5).is_err());
    assert!(PhysicalParameters::new(1.0, -0.1, 0.5).is_err());
    assert!(PhysicalParameters::new(1.0, 1.0, f64::INFINITY).is_err());
    assert!(PhysicalParameters::new(1.0, 0.0, 0.0).is_ok());
}
