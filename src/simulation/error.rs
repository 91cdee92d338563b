//! Error types and handling
//!
//! This module contains error types and the result alias for the simulation
//! driver layer. The core tick machinery never fails; errors arise from
//! configuration, roster generation, and report I/O.

use thiserror::Error;

/// Errors that can occur while setting up or reporting on a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Passenger roster generation failed
    #[error("Passenger generation failed: {0}")]
    PassengerGenerationError(String),

    /// Run report generation failed
    #[error("Report error: {0}")]
    ReportError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<String> for SimulationError {
    fn from(s: String) -> Self {
        SimulationError::ReportError(s)
    }
}

impl From<&str> for SimulationError {
    fn from(s: &str) -> Self {
        SimulationError::ReportError(s.to_string())
    }
}

impl From<anyhow::Error> for SimulationError {
    fn from(error: anyhow::Error) -> Self {
        SimulationError::ReportError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a passenger generation error
    pub fn passenger_generation_error(msg: impl Into<String>) -> Self {
        Self::PassengerGenerationError(msg.into())
    }

    /// Create a report error
    pub fn report_error(msg: impl Into<String>) -> Self {
        Self::ReportError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::PassengerGenerationError(_) => "Passenger Generation",
            SimulationError::ReportError(_) => "Report",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
