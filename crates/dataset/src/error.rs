//! Dataset loading errors

use docseed_client::EndpointError;
use docseed_core::{IdError, ValueError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a seed file
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Seed file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported seed file format: {0} (expected .toml or .json)")]
    UnknownFormat(PathBuf),

    /// Seed file is not valid TOML / JSON for the expected layout
    #[error("invalid {format} seed file: {message}")]
    Parse {
        /// "TOML" or "JSON"
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// Collection name rejected
    #[error("invalid collection name: {0}")]
    InvalidCollectionName(#[source] IdError),

    /// Same collection declared twice
    #[error("duplicate collection: {0}")]
    DuplicateCollection(String),

    /// Collection requested that the seed file does not declare
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// Document id rejected
    #[error("invalid document id in {collection}: {source}")]
    InvalidDocumentId {
        /// Collection being loaded
        collection: String,
        /// Validation failure
        #[source]
        source: IdError,
    },

    /// Document body cannot be represented
    #[error("invalid document {collection}/{doc_id}: {source}")]
    InvalidRecord {
        /// Collection being loaded
        collection: String,
        /// Offending document
        doc_id: String,
        /// Conversion failure
        #[source]
        source: ValueError,
    },

    /// A digest field holds something other than a string
    #[error("digest field '{field}' of {collection}/{doc_id} must be a string, got {actual}")]
    DigestField {
        /// Collection being loaded
        collection: String,
        /// Offending document
        doc_id: String,
        /// Field name
        field: String,
        /// Type found instead
        actual: &'static str,
    },

    /// `[target]` is missing or ambiguous
    #[error("invalid target: {0}")]
    Target(String),

    /// Target endpoint rejected
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
