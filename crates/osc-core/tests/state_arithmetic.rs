use approx::assert_relative_eq;
use osc_core::{PhysicalParameters, State};

#[test]
fn component_wise_operations() {
    let a = State::new(1.0, 2.0, 3.0, 4.0);
    let b = State::new(0.5, -1.0, 2.0, 0.25);

    assert_eq!(a + b, State::new(1.5, 1.0, 5.0, 4.25));
    assert_eq!(a - b, State::new(0.5, 3.0, 1.0, 3.75));
    assert_eq!(a * 2.0, State::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 4.0, State::new(0.25, 0.5, 0.75, 1.0));
}

#[test]
fn array_conversion_preserves_order() {
    let state = State::from([0.1, 0.2, 0.3, 0.4]);
    assert_eq!(state.x1, 0.1);
    assert_eq!(state.v1, 0.2);
    assert_eq!(state.x2, 0.3);
    assert_eq!(state.v2, 0.4);
    assert_eq!(state.to_array(), [0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn finiteness_checks() {
    assert!(State::new(0.1, 0.0, -0.1, 0.0).is_finite());
    assert!(State::new(0.1, 0.0, -0.1, 0.0).validate().is_ok());

    let bad = State::new(0.1, f64::NAN, -0.1, 0.0);
    assert!(!bad.is_finite());
    let err = bad.validate().unwrap_err();
    assert_eq!(err.info().context.get("parameter").map(String::as_str), Some("v1"));
}

#[test]
fn normal_mode_frequencies() {
    let params = PhysicalParameters::new(2.0, 8.0, 1.0).unwrap();
    assert_relative_eq!(params.symmetric_frequency(), 2.0);
    assert_relative_eq!(params.antisymmetric_frequency(), 5.0_f64.sqrt());
}
