//! Custom error types for Spendview
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The list synchronizer itself is
//! infallible; these errors cover settings I/O and record validation.

use thiserror::Error;

use crate::models::entry::EntryValidationError;

/// The main error type for Spendview operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<EntryValidationError> for TrackerError {
    fn from(err: EntryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for Spendview operations
pub type TrackerResult<T> = Result<T, TrackerError>;
