//! Error types for the value model

use thiserror::Error;

/// Rejection of foreign input that has no [`crate::Value`] representation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Integer does not fit in a signed 64-bit value
    #[error("integer out of range: {0}")]
    IntegerOutOfRange(String),

    /// Input shape the document store cannot carry
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// A record must be a string-keyed mapping
    #[error("expected a mapping for record, got {0}")]
    NotAMapping(&'static str),
}

/// Rejection of a collection name or document id
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Identifier is empty
    #[error("{kind} must not be empty")]
    Empty {
        /// Which identifier was rejected
        kind: &'static str,
    },

    /// Identifier contains a path separator
    #[error("{kind} '{id}' must not contain '/'")]
    ContainsSlash {
        /// Which identifier was rejected
        kind: &'static str,
        /// The rejected identifier
        id: String,
    },

    /// Identifier is `.` or `..`
    #[error("{kind} '{id}' is reserved")]
    Reserved {
        /// Which identifier was rejected
        kind: &'static str,
        /// The rejected identifier
        id: String,
    },

    /// Identifier exceeds the store's byte limit
    #[error("{kind} is {len} bytes, limit is {max}")]
    TooLong {
        /// Which identifier was rejected
        kind: &'static str,
        /// Actual length in bytes
        len: usize,
        /// Maximum length in bytes
        max: usize,
    },
}
