//! Error types for cosmic-smoke

use thiserror::Error;

/// Error thrown when the server answers with a status the check did not expect
#[derive(Debug, Error)]
#[error("{method} {path} returned {actual}, expected {expected}")]
pub struct UnexpectedStatusError {
    pub method: String,
    pub path: String,
    pub expected: String,
    pub actual: u16,
}

/// Error thrown when a JSON document lacks a property the check requires
#[derive(Debug, Error)]
#[error("{context}: missing property '{field}'. Present properties: {}", present.join(", "))]
pub struct MissingFieldError {
    pub context: String,
    pub field: String,
    pub present: Vec<String>,
}

/// Error thrown when a JSON value has the wrong kind
#[derive(Debug, Error)]
#[error("{context}: expected {expected}, found {found}")]
pub struct ShapeMismatchError {
    pub context: String,
    pub expected: String,
    pub found: String,
}

/// General cosmic-smoke error type
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatusError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatchError),

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} did not return JSON: {reason}")]
    NotJson { url: String, reason: String },

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SmokeError {
    /// Shorthand for a failed assertion
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
