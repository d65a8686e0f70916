//! Domain error types
//!
//! This module defines the error hierarchy for altnames. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main altnames error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum AltNamesError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (no files, no columns)
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for AltNamesError {
    fn from(err: std::io::Error) -> Self {
        AltNamesError::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for AltNamesError {
    fn from(err: csv::Error) -> Self {
        AltNamesError::Csv(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AltNamesError {
    fn from(err: toml::de::Error) -> Self {
        AltNamesError::Configuration(format!("TOML parse error: {err}"))
    }
}
