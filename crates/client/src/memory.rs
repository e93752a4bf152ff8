//! In-memory document writer
//!
//! Mirrors the store's write semantics without any network traffic:
//! upserts replace, creates of an existing id are rejected with 409.
//! Individual ids can be set up to fail, to exercise best-effort uploads.

use crate::mode::WriteMode;
use crate::writer::{DocumentWriter, WriteError, WriteRequest};
use docseed_core::{Record, Value};
use docseed_wire::{decode_document, DecodeError};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};

/// One write as observed by a [`MemoryWriter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    /// Collection name
    pub collection: String,
    /// Document id
    pub doc_id: String,
    /// Mode the write was sent with
    pub mode: WriteMode,
    /// Raw request body
    pub body: String,
}

#[derive(Default)]
struct State {
    documents: BTreeMap<(String, String), String>,
    log: Vec<RecordedWrite>,
    failures: HashMap<(String, String), WriteError>,
}

/// Document store held in memory
#[derive(Default)]
pub struct MemoryWriter {
    state: Mutex<State>,
}

impl MemoryWriter {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `collection/doc_id` fail with `error`
    pub fn fail_with(&self, collection: &str, doc_id: &str, error: WriteError) {
        self.state
            .lock()
            .failures
            .insert((collection.to_string(), doc_id.to_string()), error);
    }

    /// Every write attempted, in order, including failed ones
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.state.lock().log.clone()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.state.lock().documents.len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.state.lock().documents.is_empty()
    }

    /// Raw stored body of a document
    pub fn body(&self, collection: &str, doc_id: &str) -> Option<String> {
        self.state
            .lock()
            .documents
            .get(&(collection.to_string(), doc_id.to_string()))
            .cloned()
    }

    /// Stored document decoded back into a record
    pub fn record(&self, collection: &str, doc_id: &str) -> Option<Result<Record, DecodeError>> {
        self.body(collection, doc_id).map(|body| decode_document(&body))
    }

    /// Field of a stored document, decoded
    pub fn field(&self, collection: &str, doc_id: &str, field: &str) -> Option<Value> {
        self.record(collection, doc_id)?
            .ok()?
            .get(field)
            .cloned()
    }

    /// Ids stored in a collection, sorted
    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.state
            .lock()
            .documents
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, id)| id.clone())
            .collect()
    }
}

impl DocumentWriter for MemoryWriter {
    fn write(&self, request: &WriteRequest<'_>) -> Result<(), WriteError> {
        let key = (
            request.collection.as_str().to_string(),
            request.doc_id.as_str().to_string(),
        );
        let mut state = self.state.lock();
        state.log.push(RecordedWrite {
            collection: key.0.clone(),
            doc_id: key.1.clone(),
            mode: request.mode,
            body: request.body.to_string(),
        });

        if let Some(error) = state.failures.get(&key) {
            return Err(error.clone());
        }

        if request.mode == WriteMode::Create && state.documents.contains_key(&key) {
            return Err(WriteError::Rejected {
                status: 409,
                body: format!(
                    r#"{{"error":{{"code":409,"message":"Document already exists: {}/{}","status":"ALREADY_EXISTS"}}}}"#,
                    key.0, key.1
                ),
            });
        }

        state.documents.insert(key, request.body.to_string());
        Ok(())
    }
}
