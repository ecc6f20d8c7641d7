use std::fs;
use std::path::{Path, PathBuf};

use osc_core::errors::ErrorInfo;
use osc_core::{OscError, PhysicalParameters, State};
use serde::{Deserialize, Serialize};

/// YAML-configurable description of a single simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Mass and spring constants.
    #[serde(default)]
    pub parameters: ParameterConfig,
    /// Initial positions and velocities.
    #[serde(default)]
    pub initial: InitialConditions,
    /// Step size and simulated duration.
    #[serde(default)]
    pub integration: IntegrationConfig,
    /// Where the time-series table is written.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Reads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, OscError> {
        let contents =
            fs::read_to_string(path).map_err(|err| OscError::io("config-read", &err, path))?;
        Self::from_yaml(&contents).map_err(|err| match err {
            OscError::Config(info) => {
                OscError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, OscError> {
        serde_yaml::from_str(text).map_err(|err| {
            OscError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_hint("see SimulationConfig for the accepted keys"),
            )
        })
    }

    /// Builds the validated physical parameters.
    pub fn physical_parameters(&self) -> Result<PhysicalParameters, OscError> {
        PhysicalParameters::new(
            self.parameters.mass,
            self.parameters.k,
            self.parameters.k_coupling,
        )
    }

    /// Builds the initial state, rejecting non-finite components.
    pub fn initial_state(&self) -> Result<State, OscError> {
        let state = State::new(
            self.initial.x1,
            self.initial.v1,
            self.initial.x2,
            self.initial.v2,
        );
        state.validate()?;
        Ok(state)
    }
}

/// Physical constants as they appear in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Mass of each oscillator (kg).
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Stiffness of the anchoring springs (N/m).
    #[serde(default = "default_k")]
    pub k: f64,
    /// Stiffness of the coupling spring (N/m).
    #[serde(default = "default_k_coupling")]
    pub k_coupling: f64,
}

fn default_mass() -> f64 {
    1.0
}

fn default_k() -> f64 {
    1.0
}

fn default_k_coupling() -> f64 {
    0.5
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            mass: default_mass(),
            k: default_k(),
            k_coupling: default_k_coupling(),
        }
    }
}

/// Initial displacement and velocity of each mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Initial position of the first mass (m).
    #[serde(default = "default_x1")]
    pub x1: f64,
    /// Initial velocity of the first mass (m/s).
    #[serde(default)]
    pub v1: f64,
    /// Initial position of the second mass (m).
    #[serde(default = "default_x2")]
    pub x2: f64,
    /// Initial velocity of the second mass (m/s).
    #[serde(default)]
    pub v2: f64,
}

fn default_x1() -> f64 {
    0.1
}

fn default_x2() -> f64 {
    -0.1
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            x1: default_x1(),
            v1: 0.0,
            x2: default_x2(),
            v2: 0.0,
        }
    }
}

/// Fixed step size and total simulated time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Time step (s).
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Total simulated time (s). The step count is `floor(t_max / dt)`.
    #[serde(default = "default_t_max")]
    pub t_max: f64,
}

fn default_dt() -> f64 {
    0.01
}

fn default_t_max() -> f64 {
    10.0
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            t_max: default_t_max(),
        }
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the table. Created if it does not exist.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Base file name without extension.
    #[serde(default = "default_name")]
    pub name: String,
    /// File extension appended to `name`.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Also write a JSON run manifest next to the table.
    #[serde(default)]
    pub manifest: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_name() -> String {
    "test_coupled_oscillators".into()
}

fn default_extension() -> String {
    "dat".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            name: default_name(),
            extension: default_extension(),
            manifest: false,
        }
    }
}
