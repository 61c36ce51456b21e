//! Core error types for zenlogger-core.
//!
//! The taxonomy mirrors how callers are expected to react:
//! - [`StoreError::Unavailable`]: the backing medium could not be reached.
//!   Retry or surface to the user; never fatal to the timer.
//! - [`StoreError::CorruptData`]: a stored value did not decode into the
//!   expected shape. Readers degrade to empty/default.
//! - [`BackupError::InvalidFormat`]: a backup document was rejected before
//!   any key was written.
//! - [`ValidationError`]: bad user input. Goal minutes are clamped rather
//!   than reported.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zenlogger-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Backup import/export errors
    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying medium cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value is not valid JSON of the expected shape.
    #[error("Corrupt data under key '{key}': {message}")]
    CorruptData { key: String, message: String },
}

/// Backup codec errors.
#[derive(Error, Debug)]
pub enum BackupError {
    /// The document failed validation; nothing was written.
    #[error("Invalid backup format: {0}")]
    InvalidFormat(String),

    /// Reading or writing the store failed mid-way.
    #[error(transparent)]
    Store(#[from] StoreError),
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

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Goal below one minute (auto-clamped by the engine)
    #[error("Goal must be at least 1 minute, got {given:?}")]
    GoalTooShort { given: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl StoreError {
    pub(crate) fn corrupt(key: &str, err: impl std::fmt::Display) -> Self {
        StoreError::CorruptData {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
