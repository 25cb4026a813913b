//! Error types and handling
//!
//! The state machine itself cannot fail; these errors belong to the driver
//! around it (configuration, writing narration, serializing output).

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while running the simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }

    /// Whether the output stream went away (e.g. `| head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, SimulationError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
