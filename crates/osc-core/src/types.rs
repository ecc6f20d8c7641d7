use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::OscError;

/// Positions and velocities of both oscillators at one instant.
///
/// Arithmetic is component-wise so that Runge-Kutta stages can be written
/// directly as `state + k1 * 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    /// Displacement of the first mass.
    pub x1: f64,
    /// Velocity of the first mass.
    pub v1: f64,
    /// Displacement of the second mass.
    pub x2: f64,
    /// Velocity of the second mass.
    pub v2: f64,
}

impl State {
    /// Creates a state from its four components.
    pub const fn new(x1: f64, v1: f64, x2: f64, v2: f64) -> Self {
        Self { x1, v1, x2, v2 }
    }

    /// Returns `true` when all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.v1.is_finite() && self.x2.is_finite() && self.v2.is_finite()
    }

    /// Components in `(x1, v1, x2, v2)` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.v1, self.x2, self.v2]
    }

    /// Rejects states carrying NaN or infinite components.
    pub fn validate(&self) -> Result<(), OscError> {
        for (name, value) in ["x1", "v1", "x2", "v2"].into_iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(OscError::invalid_parameter(
                    "state-non-finite",
                    name,
                    value,
                    "initial state components must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl From<[f64; 4]> for State {
    fn from(values: [f64; 4]) -> Self {
        let [x1, v1, x2, v2] = values;
        Self { x1, v1, x2, v2 }
    }
}

impl Add for State {
    type Output = State;

    fn add(self, rhs: State) -> State {
        State {
            x1: self.x1 + rhs.x1,
            v1: self.v1 + rhs.v1,
            x2: self.x2 + rhs.x2,
            v2: self.v2 + rhs.v2,
        }
    }
}

impl Sub for State {
    type Output = State;

    fn sub(self, rhs: State) -> State {
        State {
            x1: self.x1 - rhs.x1,
            v1: self.v1 - rhs.v1,
            x2: self.x2 - rhs.x2,
            v2: self.v2 - rhs.v2,
        }
    }
}

impl Mul<f64> for State {
    type Output = State;

    fn mul(self, rhs: f64) -> State {
        State {
            x1: self.x1 * rhs,
            v1: self.v1 * rhs,
            x2: self.x2 * rhs,
            v2: self.v2 * rhs,
        }
    }
}

impl Mul<State> for f64 {
    type Output = State;

    fn mul(self, rhs: State) -> State {
        rhs * self
    }
}

impl Div<f64> for State {
    type Output = State;

    fn div(self, rhs: f64) -> State {
        State {
            x1: self.x1 / rhs,
            v1: self.v1 / rhs,
            x2: self.x2 / rhs,
            v2: self.v2 / rhs,
        }
    }
}

/// Mass and spring constants of the coupled system, fixed for a run.
///
/// Construction validates the values, so a `PhysicalParameters` in hand is
/// always safe to divide by `mass`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct PhysicalParameters {
    mass: f64,
    k: f64,
    k_coupling: f64,
}

#[derive(Deserialize)]
struct RawParameters {
    mass: f64,
    k: f64,
    k_coupling: f64,
}

impl TryFrom<RawParameters> for PhysicalParameters {
    type Error = OscError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        PhysicalParameters::new(raw.mass, raw.k, raw.k_coupling)
    }
}

impl PhysicalParameters {
    /// Validates and builds a parameter set.
    ///
    /// `mass` must be finite and strictly positive; both spring constants
    /// must be finite and non-negative.
    pub fn new(mass: f64, k: f64, k_coupling: f64) -> Result<Self, OscError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(OscError::InvalidParameter(
                crate::ErrorInfo::new("mass-non-positive", "mass must be finite and > 0")
                    .with_context("parameter", "mass")
                    .with_context("value", mass.to_string())
                    .with_hint("the equations of motion divide by the mass"),
            ));
        }
        if !k.is_finite() || k < 0.0 {
            return Err(OscError::invalid_parameter(
                "spring-constant-negative",
                "k",
                k,
                "spring constant must be finite and >= 0",
            ));
        }
        if !k_coupling.is_finite() || k_coupling < 0.0 {
            return Err(OscError::invalid_parameter(
                "coupling-constant-negative",
                "k_coupling",
                k_coupling,
                "coupling constant must be finite and >= 0",
            ));
        }
        Ok(Self {
            mass,
            k,
            k_coupling,
        })
    }

    /// Mass of each oscillator.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Stiffness of the springs tethering each mass to its anchor.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Stiffness of the spring coupling the two masses.
    pub fn k_coupling(&self) -> f64 {
        self.k_coupling
    }

    /// Angular frequency of the in-phase normal mode, `sqrt(k / m)`.
    pub fn symmetric_frequency(&self) -> f64 {
        (self.k / self.mass).sqrt()
    }

    /// Angular frequency of the anti-phase normal mode, `sqrt((k + 2 k_c) / m)`.
    pub fn antisymmetric_frequency(&self) -> f64 {
        ((self.k + 2.0 * self.k_coupling) / self.mass).sqrt()
    }
}
