//! Error types for the fallible edges of the crate.
//!
//! Interaction never fails: illegal pointer input is ignored. Only loading
//! configuration and decoding persisted objects can return errors.

use thiserror::Error;

/// Errors that can occur while loading a [`CanvasConfig`](crate::config::CanvasConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that can occur while encoding or decoding object records
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No constructor registered for the recorded shape kind
    #[error("Unknown shape kind: {0}")]
    UnknownShape(String),

    #[error("Invalid parameters for shape `{kind}`: {reason}")]
    InvalidParameters { kind: String, reason: String },

    /// The recorded layout does not fit the recorded shape
    #[error("Invalid layout for shape `{kind}`: {reason}")]
    InvalidLayout { kind: String, reason: String },
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for object persistence
pub type CodecResult<T> = Result<T, CodecError>;
