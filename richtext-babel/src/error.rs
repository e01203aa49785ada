//! Error types for format operations
//!
//! The converter itself is total and never returns these; they cover the
//! surface around it (format lookup, serialization, input limits).

use std::fmt;

/// Errors that can occur around a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation or option
    NotSupported(String),
    /// Input exceeds the configured size ceiling
    InputTooLarge { size: usize, limit: usize },
    /// A capped read hit the ceiling before the end of the input
    InputOverLimit { limit: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::InputTooLarge { size, limit } => {
                write!(f, "Input is {size} bytes, limit is {limit} bytes")
            }
            FormatError::InputOverLimit { limit } => {
                write!(f, "Input is larger than allowed, limit is {limit} bytes")
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}
