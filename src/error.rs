//! Unified error type for docseed.
//!
//! Each layer raises its own error enum; this module folds them into one
//! [`Error`] so callers only match on a single type.

use docseed_client::EndpointError;
use docseed_core::{IdError, ValueError};
use docseed_dataset::DatasetError;
use docseed_wire::{DecodeError, EncodeError};
use thiserror::Error;

/// All docseed errors.
///
/// Per-document write failures are not errors at this level: they are
/// collected in an [`UploadReport`](crate::UploadReport) so one bad record
/// never aborts a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Seed file could not be loaded or validated
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Value cannot be represented in a record
    #[error("invalid value: {0}")]
    Value(#[from] ValueError),

    /// Collection name or document id rejected
    #[error("invalid identifier: {0}")]
    Id(#[from] IdError),

    /// Document body could not be serialized
    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Wire document could not be read back
    #[error("decoding error: {0}")]
    Decode(#[from] DecodeError),

    /// Target URL rejected
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// Seeder is missing a required setting
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for docseed operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the error comes from the seed file or its target.
    pub fn is_dataset(&self) -> bool {
        matches!(self, Error::Dataset(_))
    }

    /// Check if the error is a missing or conflicting setting.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::Endpoint(_)
                | Error::Dataset(DatasetError::Target(_))
                | Error::Dataset(DatasetError::Endpoint(_))
        )
    }

    /// Check if the error is caused by bad input data.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Value(_) | Error::Id(_) | Error::Decode(_))
    }
}
