//! Identifier types for the document store
//!
//! - [`CollectionName`]: name of a grouping of documents
//! - [`DocumentId`]: caller-supplied id of a single document
//!
//! Both are validated on construction so that a malformed id is caught
//! while a dataset is loaded rather than when a write is attempted.

use crate::error::IdError;
use serde::{Deserialize, Serialize};

/// Maximum size of a document id or collection name in bytes
pub const MAX_ID_BYTES: usize = 1500;

fn validate(kind: &'static str, id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty { kind });
    }
    if id.contains('/') {
        return Err(IdError::ContainsSlash {
            kind,
            id: id.to_string(),
        });
    }
    if id == "." || id == ".." {
        return Err(IdError::Reserved {
            kind,
            id: id.to_string(),
        });
    }
    if id.len() > MAX_ID_BYTES {
        return Err(IdError::TooLong {
            kind,
            len: id.len(),
            max: MAX_ID_BYTES,
        });
    }
    Ok(())
}

/// Id of a document within a collection
///
/// # Examples
///
/// ```
/// use docseed_core::DocumentId;
///
/// let id = DocumentId::new("1042").unwrap();
/// assert_eq!(id.as_str(), "1042");
/// assert!(DocumentId::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Validate and wrap a document id
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        validate("document id", &id)?;
        Ok(DocumentId(id))
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = IdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        DocumentId::new(id)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a collection (analogous to a table)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Validate and wrap a collection name
    pub fn new(name: impl Into<String>) -> Result<Self, IdError> {
        let name = name.into();
        validate("collection name", &name)?;
        Ok(CollectionName(name))
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CollectionName {
    type Error = IdError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        CollectionName::new(name)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
