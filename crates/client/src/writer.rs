//! Document writers
//!
//! [`DocumentWriter`] is the seam between the bulk upload loop and the
//! transport. [`HttpWriter`] talks to a real document API over blocking
//! HTTP; [`crate::MemoryWriter`] keeps documents in memory.

use crate::endpoint::Endpoint;
use crate::mode::WriteMode;
use docseed_core::{CollectionName, DocumentId};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single document write
#[derive(Debug, Clone, Copy)]
pub struct WriteRequest<'a> {
    /// Target collection
    pub collection: &'a CollectionName,
    /// Target document id
    pub doc_id: &'a DocumentId,
    /// Write semantics
    pub mode: WriteMode,
    /// Encoded document body (JSON)
    pub body: &'a str,
}

/// Why a document write failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The store answered with a status other than 200
    #[error("rejected write (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never got an answer (DNS, connect, timeout, I/O)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The record could not be serialized
    #[error("encoding failure: {0}")]
    Encode(String),
}

impl WriteError {
    /// True for network-level failures
    pub fn is_transport(&self) -> bool {
        matches!(self, WriteError::Transport(_))
    }

    /// True when the store refused the write
    pub fn is_rejected(&self) -> bool {
        matches!(self, WriteError::Rejected { .. })
    }
}

/// Something that can persist one encoded document
pub trait DocumentWriter: Send + Sync {
    /// Write one document. `Ok` only when the store confirmed the write.
    fn write(&self, request: &WriteRequest<'_>) -> Result<(), WriteError>;
}

impl<W: DocumentWriter + ?Sized> DocumentWriter for Arc<W> {
    fn write(&self, request: &WriteRequest<'_>) -> Result<(), WriteError> {
        (**self).write(request)
    }
}

impl<W: DocumentWriter + ?Sized> DocumentWriter for Box<W> {
    fn write(&self, request: &WriteRequest<'_>) -> Result<(), WriteError> {
        (**self).write(request)
    }
}

/// Blocking HTTP writer for a document API endpoint
pub struct HttpWriter {
    endpoint: Endpoint,
    agent: ureq::Agent,
}

impl HttpWriter {
    /// Writer with the default timeout
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Writer whose requests give up after `timeout`
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { endpoint, agent }
    }

    /// Endpoint this writer targets
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl DocumentWriter for HttpWriter {
    fn write(&self, request: &WriteRequest<'_>) -> Result<(), WriteError> {
        let url = self
            .endpoint
            .write_url(request.mode, request.collection, request.doc_id);
        debug!(method = request.mode.method(), url = %url, "sending write");

        let result = self
            .agent
            .request(request.mode.method(), url.as_str())
            .set("Content-Type", "application/json")
            .send_string(request.body);

        match result {
            Ok(response) if response.status() == 200 => Ok(()),
            Ok(response) => Err(rejected(response)),
            Err(ureq::Error::Status(_, response)) => Err(rejected(response)),
            Err(ureq::Error::Transport(transport)) => {
                Err(WriteError::Transport(transport.to_string()))
            }
        }
    }
}

fn rejected(response: ureq::Response) -> WriteError {
    let status = response.status();
    let body = response
        .into_string()
        .unwrap_or_else(|e| format!("<unreadable response body: {}>", e));
    WriteError::Rejected { status, body }
}
