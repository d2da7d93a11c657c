//! CLI error type.

use quant_engine::SimulationError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument value was not understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings TOML could not be parsed.
    #[error("settings parse error: {0}")]
    Settings(#[from] toml::de::Error),

    /// The quantification engine rejected the input.
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// The run configuration was invalid.
    #[error("configuration error: {0}")]
    Config(#[from] quant_core::error::ConfigError),
}
