//! Encoding of values and records into the field-tagged wire format
//!
//! Dispatch is a match over the closed [`Value`] enum, so a boolean can
//! never be mistaken for an integer.

use super::model::{ArrayValue, Document, EncodedValue, MapValue};
use docseed_core::{Record, Value};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Serialization failure
#[derive(Debug, Error)]
pub enum EncodeError {
    /// serde_json refused the document
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a single value into its tagged wire form
pub fn encode_value(value: &Value) -> EncodedValue {
    match value {
        Value::String(s) => EncodedValue::String(s.clone()),
        Value::Bool(b) => EncodedValue::Boolean(*b),
        Value::Int(i) => EncodedValue::Integer(i.to_string()),
        Value::Float(f) => EncodedValue::Double(*f),
        Value::Array(arr) => EncodedValue::Array(ArrayValue {
            values: arr.iter().map(encode_value).collect(),
        }),
        Value::Object(obj) => EncodedValue::Map(MapValue {
            fields: encode_fields(obj),
        }),
        Value::Null => EncodedValue::Null(()),
    }
}

/// Encode a field map, keys unchanged
pub fn encode_fields(fields: &HashMap<String, Value>) -> BTreeMap<String, EncodedValue> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

/// Encode a record into a document body `{"fields": {...}}`
pub fn encode_document(record: &Record) -> Document {
    Document {
        fields: encode_fields(record.as_map()),
    }
}

/// Serialize a document to compact JSON
pub fn to_json(document: &Document) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(document)?)
}

/// Serialize a document to indented JSON
pub fn to_json_pretty(document: &Document) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Encode a record straight to the compact JSON request body
pub fn encode_json(record: &Record) -> Result<String, EncodeError> {
    to_json(&encode_document(record))
}
