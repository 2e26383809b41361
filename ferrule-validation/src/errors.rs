// Validation errors

use crate::FieldKey;
use std::fmt;
use thiserror::Error;

/// Why a field was rejected.
///
/// The fixed kinds are produced by the pipeline itself. `Custom` carries
/// whatever reason a `post` callback returned, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was not present in the input
    MissingArg,

    /// The value did not match the configured type
    BadType,

    /// The value could not be cast or is not in the allow-list
    BadValue,

    /// Caller-defined reason returned by a `post` callback
    Custom(String),
}

impl ErrorKind {
    /// Create a caller-defined reason
    pub fn custom(reason: impl Into<String>) -> Self {
        ErrorKind::Custom(reason.into())
    }

    /// Get the reason name
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::MissingArg => "missing_arg",
            ErrorKind::BadType => "bad_type",
            ErrorKind::BadValue => "bad_value",
            ErrorKind::Custom(reason) => reason,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a single field, tagged with the key the caller looked up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {key}")]
pub struct FieldError {
    /// Failure reason
    pub kind: ErrorKind,

    /// Original lookup key (never the remapped output key)
    pub key: FieldKey,
}

impl FieldError {
    /// Create a new field error
    pub fn new(kind: ErrorKind, key: FieldKey) -> Self {
        Self { kind, key }
    }

    /// Shorthand for a `missing_arg` error
    pub fn missing(key: FieldKey) -> Self {
        Self::new(ErrorKind::MissingArg, key)
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.kind.as_str(),
            "field": self.key.as_str(),
        })
    }
}

/// Errors raised while loading a declarative field set
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse field configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(String),

    #[error("Field declared more than once: {0}")]
    DuplicateField(String),

    #[error("String and symbol keys both render as: {0}")]
    KeyCollision(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
