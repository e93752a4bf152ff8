//! Convenient imports for docseed.
//!
//! ```
//! use docseed::prelude::*;
//!
//! let record = Record::new().with("nombre", "Ana").with("activo", true);
//! let body = encode_json(&record)?;
//! assert!(body.starts_with(r#"{"fields":"#));
//! # Ok::<(), docseed::Error>(())
//! ```

// Main entry point
pub use crate::seeder::{Seeder, SeederBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Values and seed files
pub use crate::types::{
    Collection, CollectionName, DocumentId, Record, SeedFile, TargetConfig, Value,
};

// Writing
pub use crate::types::{DocumentWriter, MemoryWriter, UploadReport, WriteError, WriteMode};

// Wire encoding
pub use docseed_wire::{decode_document, encode_json};

// Re-export serde_json for building records from JSON literals
pub use serde_json::json;
