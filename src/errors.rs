//! Error types for the boundary layers.
//!
//! The scoring and ROI engine is total and never fails. Errors only arise
//! where outside data enters the system: configuration files, input files,
//! catalog extensions and use case selection.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for airoi operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or understood
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Input file could not be read or understood
    #[error("Input error in {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// Input values violate a form-layer rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catalog extension is malformed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Referenced use case id is not in the catalog
    #[error("Unknown use case: {0}")]
    UnknownUseCase(String),

    /// Use case selection breaks the selection rules
    #[error("Selection error: {0}")]
    Selection(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML decoding errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an input error with path context
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for airoi operations
pub type Result<T> = std::result::Result<T, Error>;
