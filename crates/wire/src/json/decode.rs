//! Decoding of field-tagged documents back into values
//!
//! Inverse of the encoder. Used to verify encoded output and to read
//! documents returned by the store.

use super::model::{Document, EncodedValue};
use docseed_core::{Record, Value};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Input is not a well-formed tagged document
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// `integerValue` is not a decimal i64
    #[error("Invalid integerValue: {0}")]
    InvalidInteger(String),
}

/// Decode a tagged value
pub fn decode_value(encoded: &EncodedValue) -> Result<Value, DecodeError> {
    Ok(match encoded {
        EncodedValue::String(s) => Value::String(s.clone()),
        EncodedValue::Boolean(b) => Value::Bool(*b),
        EncodedValue::Integer(digits) => Value::Int(
            digits
                .parse::<i64>()
                .map_err(|_| DecodeError::InvalidInteger(digits.clone()))?,
        ),
        EncodedValue::Double(f) => Value::Float(*f),
        EncodedValue::Array(arr) => Value::Array(
            arr.values
                .iter()
                .map(decode_value)
                .collect::<Result<_, _>>()?,
        ),
        EncodedValue::Map(map) => Value::Object(decode_fields(&map.fields)?),
        EncodedValue::Null(()) => Value::Null,
    })
}

/// Decode a tagged field map
pub fn decode_fields(
    fields: &BTreeMap<String, EncodedValue>,
) -> Result<HashMap<String, Value>, DecodeError> {
    fields
        .iter()
        .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
        .collect()
}

/// Parse a JSON document body without decoding its values
pub fn parse_document(json: &str) -> Result<Document, DecodeError> {
    serde_json::from_str(json).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}

/// Decode a parsed document into a record
pub fn document_to_record(document: &Document) -> Result<Record, DecodeError> {
    decode_fields(&document.fields).map(Record::from)
}

/// Parse and decode a JSON document body into a record
pub fn decode_document(json: &str) -> Result<Record, DecodeError> {
    document_to_record(&parse_document(json)?)
}
