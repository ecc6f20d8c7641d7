use osc_core::provenance::{RunProvenance, SchemaVersion};
use osc_core::{OscError, PhysicalParameters, State};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance {
        config_hash: "config".into(),
        table_hash: "table".into(),
        created_at: "2023-10-31T00:00:00Z".into(),
        tool_versions: [("osc-core".into(), "0.1.0".into())].into_iter().collect(),
    };

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

#[test]
fn parameters_round_trip_json() {
    let params = PhysicalParameters::new(2.0, 1.5, 0.25).unwrap();
    let json = serde_json::to_string(&params).expect("serialize");
    assert_eq!(json, r#"{"mass":2.0,"k":1.5,"k_coupling":0.25}"#);
    let decoded: PhysicalParameters = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, params);
}

#[test]
fn deserializing_zero_mass_fails_validation() {
    let result: Result<PhysicalParameters, _> =
        serde_yaml::from_str("mass: 0.0\nk: 1.0\nk_coupling: 0.5\n");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("mass-non-positive"), "unexpected error: {err}");
}

#[test]
fn state_round_trip_yaml() {
    let state = State::new(0.1, 0.0, -0.1, 0.0);
    let yaml = serde_yaml::to_string(&state).expect("serialize");
    let decoded: State = serde_yaml::from_str(&yaml).expect("deserialize");
    assert_eq!(decoded, state);
}

#[test]
fn error_round_trip_json() {
    let err = OscError::invalid_parameter("dt-non-positive", "dt", 0.0, "dt must be > 0");
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains(r#""family":"InvalidParameter""#));
    let decoded: OscError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
