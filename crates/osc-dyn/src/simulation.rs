use std::path::PathBuf;

use log::{debug, info};
use osc_core::OscError;

use crate::config::SimulationConfig;
use crate::driver;
use crate::manifest::RunManifest;
use crate::output::OutputLayout;
use crate::series::EnergyDrift;

/// Summary of a completed [`simulate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// Location of the written table.
    pub table_path: PathBuf,
    /// Location of the manifest, when one was requested.
    pub manifest_path: Option<PathBuf>,
    /// Number of records in the table.
    pub records: usize,
    /// Simulated time of the final advanced state.
    pub final_time: f64,
    /// Total-energy drift over the recorded samples.
    pub energy_drift: EnergyDrift,
}

/// Runs one simulation described by `config` and persists its table.
///
/// The driver validates timing and integrates in memory before the
/// filesystem is touched, so an invalid configuration never leaves a
/// partial output behind.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, OscError> {
    let params = config.physical_parameters()?;
    let initial = config.initial_state()?;
    let timing = &config.integration;
    let trajectory = driver::run(&params, initial, timing.t_max, timing.dt)?;
    let energy_drift = trajectory.energy_drift();
    debug!(
        "energy drift: max_abs={:e} max_relative={:e}",
        energy_drift.max_abs, energy_drift.max_relative
    );

    let layout = OutputLayout::from_config(&config.output);
    let table = layout.write_table(&trajectory.records)?;
    info!(
        "wrote {} records ({} bytes) to {}",
        trajectory.records.len(),
        table.bytes,
        table.path.display()
    );

    let manifest_path = if config.output.manifest {
        let manifest = RunManifest::new(
            config,
            trajectory.records.len(),
            trajectory.time,
            energy_drift,
            table.sha256,
        )?;
        let path = layout.manifest_path();
        manifest.write(&path)?;
        info!("wrote run manifest to {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(SimulationReport {
        table_path: table.path,
        manifest_path,
        records: trajectory.records.len(),
        final_time: trajectory.time,
        energy_drift,
    })
}
