//! Structured error types shared across OSC crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`OscError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameter names, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum OscError {
    /// Physical or numerical parameters outside their valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// Filesystem failures while creating directories or writing artefacts.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Configuration files that cannot be read or parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl OscError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            OscError::InvalidParameter(info)
            | OscError::Io(info)
            | OscError::Config(info)
            | OscError::Serde(info) => info,
        }
    }

    /// Builds an [`OscError::InvalidParameter`] naming the offending parameter and value.
    pub fn invalid_parameter(
        code: impl Into<String>,
        parameter: &str,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        OscError::InvalidParameter(
            ErrorInfo::new(code, message)
                .with_context("parameter", parameter)
                .with_context("value", value.to_string()),
        )
    }

    /// Wraps an I/O failure together with the path it concerns.
    pub fn io(code: impl Into<String>, err: &std::io::Error, path: &std::path::Path) -> Self {
        OscError::Io(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    }
}
