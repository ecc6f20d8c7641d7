use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use osc_dyn::{simulate, SimulationConfig};

/// Coupled oscillator simulator using a fourth-order Runge-Kutta integrator.
///
/// Flags override values from `--config`, which in turn override the
/// built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "osc-sim", version, about)]
struct Cli {
    /// YAML configuration providing base values for every option.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Mass of each oscillator (kg) [default: 1.0].
    #[arg(long, allow_negative_numbers = true)]
    mass: Option<f64>,
    /// Stiffness of the external springs (N/m) [default: 1.0].
    #[arg(long, allow_negative_numbers = true)]
    k: Option<f64>,
    /// Stiffness of the coupling spring (N/m) [default: 0.5].
    #[arg(long = "k_coupling", allow_negative_numbers = true)]
    k_coupling: Option<f64>,
    /// Initial position of m1 (m) [default: 0.1].
    #[arg(long = "x1_0", allow_negative_numbers = true)]
    x1_0: Option<f64>,
    /// Initial velocity of m1 (m/s) [default: 0.0].
    #[arg(long = "v1_0", allow_negative_numbers = true)]
    v1_0: Option<f64>,
    /// Initial position of m2 (m) [default: -0.1].
    #[arg(long = "x2_0", allow_negative_numbers = true)]
    x2_0: Option<f64>,
    /// Initial velocity of m2 (m/s) [default: 0.0].
    #[arg(long = "v2_0", allow_negative_numbers = true)]
    v2_0: Option<f64>,
    /// Integration time step (s) [default: 0.01].
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,
    /// Total simulated time (s) [default: 10.0].
    #[arg(long = "t_max", allow_negative_numbers = true)]
    t_max: Option<f64>,
    /// Output file name without extension [default: test_coupled_oscillators].
    #[arg(long)]
    filename: Option<String>,
    /// Directory receiving the output table [default: data].
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,
    /// Also write a JSON run manifest next to the table.
    #[arg(long)]
    manifest: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimulationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        let overrides = [
            (&mut config.parameters.mass, self.mass),
            (&mut config.parameters.k, self.k),
            (&mut config.parameters.k_coupling, self.k_coupling),
            (&mut config.initial.x1, self.x1_0),
            (&mut config.initial.v1, self.v1_0),
            (&mut config.initial.x2, self.x2_0),
            (&mut config.initial.v2, self.v2_0),
            (&mut config.integration.dt, self.dt),
            (&mut config.integration.t_max, self.t_max),
        ];
        for (slot, value) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(name) = self.filename {
            config.output.name = name;
        }
        if let Some(dir) = self.out_dir {
            config.output.directory = dir;
        }
        config.output.manifest |= self.manifest;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config()?;
    debug!("resolved configuration: {config:?}");

    let report = simulate(&config)?;
    println!(
        "Simulation completed. Data saved to {}",
        report.table_path.display()
    );
    if let Some(path) = &report.manifest_path {
        println!("Run manifest saved to {}", path.display());
    }
    Ok(())
}
