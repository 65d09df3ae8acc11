//! CLI error types.

use thiserror::Error;
use valuer_core::types::ValuationError;

use crate::config::ConfigError;

/// Errors surfaced by `valuer` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command-line argument was malformed or missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The valuation could not be built.
    #[error("Valuation error: {0}")]
    Valuation(#[from] ValuationError),

    /// Report serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
