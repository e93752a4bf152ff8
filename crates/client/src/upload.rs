//! Best-effort bulk upload
//!
//! Records are written one at a time, in collection order, blocking on each
//! response. A failed write is logged and recorded; it never stops the
//! remaining records from being attempted.

use crate::mode::WriteMode;
use crate::writer::{DocumentWriter, WriteError, WriteRequest};
use docseed_core::{Collection, CollectionName, DocumentId};
use docseed_wire::encode_json;
use tracing::{error, info, warn};

/// Outcome of one document write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Collection the document belongs to
    pub collection: CollectionName,
    /// Document id
    pub doc_id: DocumentId,
    /// `None` when the write succeeded
    pub error: Option<WriteError>,
}

impl RecordOutcome {
    /// True if the document was written
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-record results of one or more collection uploads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    outcomes: Vec<RecordOutcome>,
}

impl UploadReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes in the order writes were attempted
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Number of writes attempted
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of documents written
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of failed writes
    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// Failed writes only
    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True if every attempted write succeeded
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(RecordOutcome::is_success)
    }

    /// Append another report's outcomes
    pub fn merge(&mut self, other: UploadReport) {
        self.outcomes.extend(other.outcomes);
    }

    /// One-line human summary
    ///
    /// Encode failures are listed only when there are any.
    pub fn summary(&self) -> String {
        let count = |pred: fn(&WriteError) -> bool| {
            self.failures()
                .filter(|o| o.error.as_ref().is_some_and(pred))
                .count()
        };
        let rejected = count(WriteError::is_rejected);
        let transport = count(WriteError::is_transport);
        let encode = count(|e| matches!(e, WriteError::Encode(_)));

        let mut summary = format!(
            "{} attempted, {} written, {} failed ({} rejected, {} transport",
            self.attempted(),
            self.succeeded(),
            self.failed(),
            rejected,
            transport
        );
        if encode > 0 {
            summary.push_str(&format!(", {} encode", encode));
        }
        summary.push(')');
        summary
    }

    fn push(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Write every document of `collection`, one request at a time
pub fn upload_collection<W: DocumentWriter + ?Sized>(
    writer: &W,
    mode: WriteMode,
    collection: &Collection,
) -> UploadReport {
    let name = collection.name();
    info!(
        collection = %name,
        documents = collection.len(),
        mode = %mode,
        "uploading collection"
    );

    let mut report = UploadReport::new();
    for (doc_id, record) in collection.documents() {
        let result = encode_json(record)
            .map_err(|e| WriteError::Encode(e.to_string()))
            .and_then(|body| {
                writer.write(&WriteRequest {
                    collection: name,
                    doc_id,
                    mode,
                    body: &body,
                })
            });

        match &result {
            Ok(()) => info!(collection = %name, doc_id = %doc_id, "document written"),
            Err(WriteError::Rejected { status, body }) => warn!(
                collection = %name,
                doc_id = %doc_id,
                status = *status,
                body = %body,
                "write rejected"
            ),
            Err(e) => error!(collection = %name, doc_id = %doc_id, error = %e, "write failed"),
        }

        report.push(RecordOutcome {
            collection: name.clone(),
            doc_id: doc_id.clone(),
            error: result.err(),
        });
    }

    info!(collection = %name, "{}", report.summary());
    report
}
