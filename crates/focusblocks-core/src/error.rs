//! Core error types for focusblocks-core.
//!
//! The simulation itself cannot fail once its inputs are accepted, so the
//! hierarchy is small: argument validation, configuration and share-link
//! parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusblocks-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Share-link parsing errors
    #[error("Share link error: {0}")]
    ShareLink(#[from] ShareLinkError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be created
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Share-link errors.
#[derive(Error, Debug, PartialEq)]
pub enum ShareLinkError {
    /// The link could not be parsed as a URL or query string
    #[error("Malformed link: {0}")]
    Malformed(String),

    /// A known key carried a value that is not a number
    #[error("Cannot parse '{value}' for '{key}'")]
    BadNumber { key: String, value: String },
}

impl From<url::ParseError> for ShareLinkError {
    fn from(err: url::ParseError) -> Self {
        ShareLinkError::Malformed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
