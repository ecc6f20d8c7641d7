#![deny(missing_docs)]

//! Fixed-step RK4 integration of two spring-coupled oscillators.
//!
//! The crate is layered bottom-up: [`model`] evaluates the equations of
//! motion, [`integrator`] advances a [`State`](osc_core::State) by one step,
//! [`driver`] samples the trajectory into [`TimeSeriesRecord`]s and
//! [`simulation`] ties configuration, the driver and the table writer
//! together.

/// YAML configuration schema and defaults.
pub mod config;
/// Sampling loop producing the recorded trajectory.
pub mod driver;
/// Kinetic, potential and total energy of a state.
pub mod energy;
/// Classical fourth-order Runge-Kutta step.
pub mod integrator;
/// Run manifest serialization helpers.
pub mod manifest;
/// Equations of motion for the coupled pair.
pub mod model;
/// Output path layout and table persistence.
pub mod output;
/// Time-series records and the plain-text table format.
pub mod series;
/// Validated end-to-end run from configuration to files on disk.
pub mod simulation;

pub use config::{
    InitialConditions, IntegrationConfig, OutputConfig, ParameterConfig, SimulationConfig,
};
pub use driver::{run, step_count, Trajectory};
pub use energy::{energy, EnergyBreakdown};
pub use integrator::{rk4_step, step};
pub use manifest::RunManifest;
pub use model::{derivative, CoupledOscillators, DynamicsModel};
pub use output::{OutputLayout, WrittenTable};
pub use series::{write_table, EnergyDrift, TimeSeriesRecord, TABLE_HEADER};
pub use simulation::{simulate, SimulationReport};
