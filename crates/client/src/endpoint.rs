//! Document API endpoint and request URL construction

use crate::mode::WriteMode;
use docseed_core::{CollectionName, DocumentId};
use thiserror::Error;
use url::Url;

/// API root used when an endpoint is derived from a project id
pub const DEFAULT_API_ROOT: &str = "https://firestore.googleapis.com/v1";

/// Endpoint configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// Base URL failed to parse
    #[error("invalid base url '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// Only http and https are supported
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Project id is empty or contains a path separator
    #[error("invalid project id: '{0}'")]
    InvalidProject(String),
}

/// Root of a document database's documents resource
///
/// All request URLs are `<base>/<collection>/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parse an explicit documents-root URL
    ///
    /// Trailing slashes are dropped.
    pub fn parse(base_url: &str) -> Result<Self, EndpointError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = Url::parse(trimmed).map_err(|e| EndpointError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        match base.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }
        if base.cannot_be_a_base() {
            return Err(EndpointError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical url".to_string(),
            });
        }

        Ok(Self { base })
    }

    /// Default database of a project on the hosted API
    ///
    /// # Examples
    ///
    /// ```
    /// use docseed_client::Endpoint;
    ///
    /// let endpoint = Endpoint::for_project("smartclassroom-b40d1").unwrap();
    /// assert_eq!(
    ///     endpoint.as_str(),
    ///     "https://firestore.googleapis.com/v1/projects/smartclassroom-b40d1/databases/(default)/documents"
    /// );
    /// ```
    pub fn for_project(project_id: &str) -> Result<Self, EndpointError> {
        let project_id = project_id.trim();
        if project_id.is_empty() || project_id.contains('/') {
            return Err(EndpointError::InvalidProject(project_id.to_string()));
        }
        Self::parse(&format!(
            "{}/projects/{}/databases/(default)/documents",
            DEFAULT_API_ROOT, project_id
        ))
    }

    /// The documents root as a string
    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }

    /// `<base>/<collection>`
    pub fn collection_url(&self, collection: &CollectionName) -> Url {
        self.with_segments(&[collection.as_str()])
    }

    /// `<base>/<collection>/<doc_id>`
    pub fn document_url(&self, collection: &CollectionName, doc_id: &DocumentId) -> Url {
        self.with_segments(&[collection.as_str(), doc_id.as_str()])
    }

    /// URL a write in the given mode is sent to
    ///
    /// - [`WriteMode::Upsert`]: `<base>/<collection>/<doc_id>`
    /// - [`WriteMode::Create`]: `<base>/<collection>?documentId=<doc_id>`
    pub fn write_url(&self, mode: WriteMode, collection: &CollectionName, doc_id: &DocumentId) -> Url {
        match mode {
            WriteMode::Upsert => self.document_url(collection, doc_id),
            WriteMode::Create => {
                let mut url = self.collection_url(collection);
                url.query_pairs_mut().append_pair("documentId", doc_id.as_str());
                url
            }
        }
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // parse() rejects cannot-be-a-base urls, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
