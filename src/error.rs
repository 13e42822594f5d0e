//! Error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type for the crate
///
/// This is the primary error type used throughout the library.
/// It wraps specific failure classes and provides context for error handling.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors (invalid settings, pattern library
    /// load failures, logging setup)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A requested column is absent from the table
    #[error("Column not found: {name}")]
    MissingColumn { name: String },

    /// Invalid request shape (e.g. destination column equals the source)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Opaque detector failure surfaced unchanged
    #[error("Detection error: {0}")]
    Detection(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(format!("TOML parse error: {err}"))
    }
}
