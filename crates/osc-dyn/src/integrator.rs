//! Classical fourth-order Runge-Kutta (RK4) with a fixed step.
//!
//! Four derivative evaluations per step, combined with weights
//! `1/6, 2/6, 2/6, 1/6`. Local truncation error is O(dt⁵) and global error
//! O(dt⁴) for smooth right-hand sides. There is no error control: the caller
//! owns the choice of `dt`.

use osc_core::{PhysicalParameters, State};

use crate::model::{CoupledOscillators, DynamicsModel};

/// Advances `state` from `t` to `t + dt` and returns the new state.
pub fn rk4_step<M: DynamicsModel + ?Sized>(model: &M, state: State, t: f64, dt: f64) -> State {
    let half = 0.5 * dt;
    let k1 = model.derivative(t, &state) * dt;
    let k2 = model.derivative(t + half, &(state + k1 * 0.5)) * dt;
    let k3 = model.derivative(t + half, &(state + k2 * 0.5)) * dt;
    let k4 = model.derivative(t + dt, &(state + k3)) * dt;
    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0
}

/// One RK4 step of the coupled-oscillator equations for `params`.
pub fn step(state: State, t: f64, dt: f64, params: &PhysicalParameters) -> State {
    rk4_step(&CoupledOscillators::new(*params), state, t, dt)
}
