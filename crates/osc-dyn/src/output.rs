use std::fs;
use std::path::{Path, PathBuf};

use osc_core::errors::ErrorInfo;
use osc_core::OscError;

use crate::config::OutputConfig;
use crate::manifest::sha256_hex;
use crate::series::{write_table, TimeSeriesRecord};

/// A table persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    /// Location of the file.
    pub path: PathBuf,
    /// Number of bytes written.
    pub bytes: usize,
    /// SHA-256 of the file contents.
    pub sha256: String,
}

/// Resolved artefact paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    directory: PathBuf,
    name: String,
    extension: String,
}

impl OutputLayout {
    /// Creates a layout writing `<directory>/<name>.<extension>`.
    pub fn new(
        directory: impl Into<PathBuf>,
        name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// Builds the layout described by an [`OutputConfig`].
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory, &config.name, &config.extension)
    }

    /// Directory receiving all artefacts.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the time-series table.
    pub fn table_path(&self) -> PathBuf {
        self.directory.join(format!("{}.{}", self.name, self.extension))
    }

    /// Path of the optional JSON run manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.directory.join(format!("{}.manifest.json", self.name))
    }

    /// Creates the output directory if it does not already exist.
    pub fn ensure_directory(&self) -> Result<(), OscError> {
        fs::create_dir_all(&self.directory)
            .map_err(|err| OscError::io("output-mkdir", &err, &self.directory))
    }

    /// Writes the table for `records`, replacing any previous file.
    pub fn write_table(&self, records: &[TimeSeriesRecord]) -> Result<WrittenTable, OscError> {
        let mut buffer = Vec::with_capacity(records.len() * 96 + 64);
        write_table(records, &mut buffer)
            .map_err(|err| OscError::Io(ErrorInfo::new("table-render", err.to_string())))?;
        self.ensure_directory()?;
        let path = self.table_path();
        fs::write(&path, &buffer).map_err(|err| OscError::io("table-write", &err, &path))?;
        Ok(WrittenTable {
            sha256: sha256_hex(&buffer),
            bytes: buffer.len(),
            path,
        })
    }
}
