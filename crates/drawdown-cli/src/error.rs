//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use drawdown_core::DrawdownError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this tool.
    #[error("Invalid config file {path}: {reason}")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Configuration values are inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Market or portfolio construction failed.
    #[error("Invalid input: {0}")]
    Input(#[from] DrawdownError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
