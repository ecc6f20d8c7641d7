use log::debug;
use osc_core::errors::ErrorInfo;
use osc_core::{OscError, PhysicalParameters, State};
use serde::{Deserialize, Serialize};

use crate::integrator::rk4_step;
use crate::model::CoupledOscillators;
use crate::series::{EnergyDrift, TimeSeriesRecord};

/// Output of a driver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// One record per step, sampled before the step is taken.
    pub records: Vec<TimeSeriesRecord>,
    /// State after the last step. It is never part of `records`.
    pub state: State,
    /// Simulated time reached by `state`.
    pub time: f64,
}

impl Trajectory {
    /// Total-energy drift across the recorded samples.
    pub fn energy_drift(&self) -> EnergyDrift {
        EnergyDrift::from_records(&self.records)
    }
}

/// Largest number of steps a single run may take.
pub const MAX_STEPS: usize = 100_000_000;

/// Number of fixed steps covering `t_max`, truncating any partial final step.
pub fn step_count(t_max: f64, dt: f64) -> usize {
    (t_max / dt).floor() as usize
}

/// Rejects step sizes and durations that cannot drive a forward run.
fn validate_timing(t_max: f64, dt: f64) -> Result<(), OscError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(OscError::invalid_parameter(
            "dt-non-positive",
            "dt",
            dt,
            "time step must be finite and > 0",
        ));
    }
    if !t_max.is_finite() || t_max < 0.0 {
        return Err(OscError::invalid_parameter(
            "t-max-negative",
            "t_max",
            t_max,
            "total simulated time must be finite and >= 0",
        ));
    }
    let steps = (t_max / dt).floor();
    if !(steps <= MAX_STEPS as f64) {
        return Err(OscError::InvalidParameter(
            ErrorInfo::new(
                "step-count-overflow",
                format!("t_max / dt must not exceed {MAX_STEPS} steps"),
            )
            .with_context("parameter", "dt")
            .with_context("value", dt.to_string())
            .with_context("t_max", t_max.to_string())
            .with_hint("increase dt or shorten t_max"),
        ));
    }
    Ok(())
}

/// Integrates from `t = 0` for `floor(t_max / dt)` steps.
///
/// Each record is taken from the state at the start of its step, so the
/// first record is `initial` verbatim and exactly `step_count(t_max, dt)`
/// records are produced.
pub fn run(
    params: &PhysicalParameters,
    initial: State,
    t_max: f64,
    dt: f64,
) -> Result<Trajectory, OscError> {
    validate_timing(t_max, dt)?;
    initial.validate()?;

    let steps = step_count(t_max, dt);
    debug!("integrating {steps} steps of dt={dt} up to t_max={t_max}");

    let model = CoupledOscillators::new(*params);
    let mut records = Vec::with_capacity(steps);
    let mut state = initial;
    let mut time = 0.0;
    for _ in 0..steps {
        records.push(TimeSeriesRecord::sample(time, state, params));
        state = rk4_step(&model, state, time, dt);
        time += dt;
    }

    Ok(Trajectory {
        records,
        state,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_truncates() {
        assert_eq!(step_count(10.0, 0.01), 1000);
        assert_eq!(step_count(1.0, 0.3), 3);
        assert_eq!(step_count(1.0, 0.001), 1000);
        assert_eq!(step_count(0.0, 0.1), 0);
        assert_eq!(step_count(0.05, 0.1), 0);
    }

    #[test]
    fn zero_duration_yields_empty_series() {
        let params = PhysicalParameters::new(1.0, 1.0, 0.5).unwrap();
        let initial = State::new(0.1, 0.0, -0.1, 0.0);
        let trajectory = run(&params, initial, 0.0, 0.01).unwrap();
        assert!(trajectory.records.is_empty());
        assert_eq!(trajectory.state, initial);
        assert_eq!(trajectory.time, 0.0);
    }

    #[test]
    fn non_positive_dt_is_rejected() {
        let params = PhysicalParameters::new(1.0, 1.0, 0.5).unwrap();
        let initial = State::new(0.1, 0.0, -0.1, 0.0);
        for dt in [0.0, -0.01, f64::NAN] {
            let err = run(&params, initial, 1.0, dt).unwrap_err();
            assert!(matches!(err, OscError::InvalidParameter(_)));
            assert_eq!(err.info().code, "dt-non-positive");
        }
        assert!(run(&params, initial, -1.0, 0.01).is_err());
        assert!(run(&params, initial, f64::INFINITY, 0.01).is_err());
    }

    #[test]
    fn unbounded_step_count_is_rejected() {
        let params = PhysicalParameters::new(1.0, 1.0, 0.5).unwrap();
        let initial = State::new(0.1, 0.0, -0.1, 0.0);
        let cases = [
            (1.0, 1e-300),
            (f64::MAX, 1e-10),
            (1.0, 1.0 / (MAX_STEPS as f64 * 2.0)),
        ];
        for (t_max, dt) in cases {
            let err = run(&params, initial, t_max, dt).unwrap_err();
            assert!(matches!(err, OscError::InvalidParameter(_)));
            assert_eq!(err.info().code, "step-count-overflow");
        }
        assert!(validate_timing(MAX_STEPS as f64, 1.0).is_ok());
        assert!(run(&params, initial, 0.0, 1e-300).unwrap().records.is_empty());
    }
}
