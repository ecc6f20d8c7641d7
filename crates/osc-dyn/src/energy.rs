use osc_core::{PhysicalParameters, State};
use serde::{Deserialize, Serialize};

/// Mechanical energy of a state, split into its two contributions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyBreakdown {
    /// `0.5 * m * (v1² + v2²)`.
    pub kinetic: f64,
    /// Energy stored in the two anchoring springs and the coupling spring.
    pub potential: f64,
    /// `kinetic + potential`.
    pub total: f64,
}

/// Computes the kinetic, potential and total energy of `state`.
pub fn energy(state: &State, params: &PhysicalParameters) -> EnergyBreakdown {
    let State { x1, v1, x2, v2 } = *state;
    let kinetic = 0.5 * params.mass() * (v1.powi(2) + v2.powi(2));
    let potential = 0.5 * params.k() * (x1.powi(2) + x2.powi(2))
        + 0.5 * params.k_coupling() * (x1 - x2).powi(2);
    EnergyBreakdown {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
