//! Records and collections
//!
//! A [`Record`] is one logical entity (a user, a classroom, a student) as a
//! string-keyed mapping of attributes. A [`Collection`] groups records by
//! [`DocumentId`] under a [`CollectionName`], keeping load order.

use crate::error::ValueError;
use crate::types::{CollectionName, DocumentId};
use crate::value::Value;
use std::collections::hash_map;
use std::collections::HashMap;

/// Field name to value mapping for a single document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style [`Record::insert`]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Get a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a field mutably
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.0.get_mut(field)
    }

    /// Remove a field
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Iterate over fields in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying map
    pub fn into_map(self) -> HashMap<String, Value> {
        self.0
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(map: HashMap<String, Value>) -> Self {
        Record(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            other => Err(ValueError::NotAMapping(other.type_name())),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Named, ordered group of records keyed by document id
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    name: CollectionName,
    documents: Vec<(DocumentId, Record)>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: CollectionName) -> Self {
        Self {
            name,
            documents: Vec::new(),
        }
    }

    /// Collection name
    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    /// Add a document
    ///
    /// A document id already present keeps its position and has its record
    /// replaced, so every id appears at most once.
    pub fn insert(&mut self, id: DocumentId, record: Record) -> Option<Record> {
        match self.documents.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, record)),
            None => {
                self.documents.push((id, record));
                None
            }
        }
    }

    /// Look up a document by id
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.documents
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, record)| record)
    }

    /// Documents in insertion order
    pub fn documents(&self) -> &[(DocumentId, Record)] {
        &self.documents
    }

    /// Mutable access to every record in insertion order
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.documents.iter_mut().map(|(_, record)| record)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if there are no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
