//! Error types for Olympia.
//!
//! A single error enum covers configuration, I/O, catalog, prompt and
//! serialization failures. Prompt builders themselves never fail; errors
//! come from the layers around them (config files, custom templates,
//! catalog overrides, unknown selections).

use thiserror::Error;

/// Unified error type for Olympia.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Topic catalog errors (unknown ids, invalid overrides)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
