use osc_core::{PhysicalParameters, State};

/// Right-hand side of a first-order system `dy/dt = f(t, y)` over [`State`].
pub trait DynamicsModel: Send + Sync {
    /// Evaluates the time derivative of `state` at time `t`.
    fn derivative(&self, t: f64, state: &State) -> State;
}

/// Two equal masses, each tethered to an anchor by a spring of stiffness
/// `k` and joined to each other by a spring of stiffness `k_coupling`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledOscillators {
    params: PhysicalParameters,
}

impl CoupledOscillators {
    /// Wraps an already validated parameter set.
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }
}

impl DynamicsModel for CoupledOscillators {
    fn derivative(&self, _t: f64, state: &State) -> State {
        let m = self.params.mass();
        let k = self.params.k();
        let kc = self.params.k_coupling();
        let State { x1, v1, x2, v2 } = *state;
        State {
            x1: v1,
            v1: (-k * x1 - kc * (x1 - x2)) / m,
            x2: v2,
            v2: (-k * x2 - kc * (x2 - x1)) / m,
        }
    }
}

/// Time derivative of `state` for the given parameters.
///
/// The equations are time-invariant; `t` is accepted for symmetry with
/// [`DynamicsModel::derivative`].
pub fn derivative(state: &State, t: f64, params: &PhysicalParameters) -> State {
    CoupledOscillators::new(*params).derivative(t, state)
}
