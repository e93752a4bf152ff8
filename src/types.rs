//! Public types for the docseed API.
//!
//! Re-exported from the internal crates under one path.

// Value model
pub use docseed_core::{Collection, CollectionName, DocumentId, Record, SpecialFloatKind, Value};

// Wire format
pub use docseed_wire::{Document, EncodedValue};

// Transport
pub use docseed_client::{
    DocumentWriter, Endpoint, HttpWriter, MemoryWriter, RecordOutcome, RecordedWrite,
    UploadReport, WriteError, WriteMode, WriteRequest, DEFAULT_API_ROOT, DEFAULT_TIMEOUT,
};

// Seed files
pub use docseed_dataset::{SeedFile, TargetConfig};
