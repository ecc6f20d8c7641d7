use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use osc_core::errors::ErrorInfo;
use osc_core::provenance::{RunProvenance, SchemaVersion};
use osc_core::OscError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SimulationConfig;
use crate::series::EnergyDrift;

/// Structured manifest describing a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Schema version of this manifest.
    pub schema_version: SchemaVersion,
    /// Configuration used for the run.
    pub config: SimulationConfig,
    /// Number of records in the table.
    pub records: usize,
    /// Simulated time of the final advanced state.
    pub final_time: f64,
    /// Total-energy drift over the recorded samples.
    pub energy_drift: EnergyDrift,
    /// Hashes, timestamp and tool versions.
    pub provenance: RunProvenance,
}

impl RunManifest {
    /// Builds a manifest for a finished run whose table hashes to `table_hash`.
    pub fn new(
        config: &SimulationConfig,
        records: usize,
        final_time: f64,
        energy_drift: EnergyDrift,
        table_hash: impl Into<String>,
    ) -> Result<Self, OscError> {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("osc-dyn".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Ok(Self {
            schema_version: SchemaVersion::new(1, 0, 0),
            config: config.clone(),
            records,
            final_time,
            energy_drift,
            provenance: RunProvenance {
                config_hash: config_hash(config)?,
                table_hash: table_hash.into(),
                created_at: chrono::Utc::now().to_rfc3339(),
                tool_versions,
            },
        })
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), OscError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| OscError::io("manifest-mkdir", &err, parent))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            OscError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| OscError::io("manifest-write", &err, path))
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, OscError> {
        let contents =
            fs::read_to_string(path).map_err(|err| OscError::io("manifest-read", &err, path))?;
        serde_json::from_str(&contents).map_err(|err| {
            OscError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// Stable hexadecimal SHA-256 of a configuration's JSON encoding.
pub fn config_hash(config: &SimulationConfig) -> Result<String, OscError> {
    let bytes = serde_json::to_vec(config)
        .map_err(|err| OscError::Serde(ErrorInfo::new("config-serialize", err.to_string())))?;
    Ok(sha256_hex(&bytes))
}

/// Lowercase hexadecimal SHA-256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
