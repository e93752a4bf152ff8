//! Serde model of the field-tagged wire format
//!
//! Each variant of [`EncodedValue`] serializes as a single-key JSON object
//! whose key is the wire tag, e.g. `{"integerValue": "42"}`. Map keys are
//! held in a `BTreeMap` so serialized output has a stable key order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tagged wire representation of a [`docseed_core::Value`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EncodedValue {
    /// `{"stringValue": "..."}`
    #[serde(rename = "stringValue")]
    String(String),

    /// `{"booleanValue": true}`
    #[serde(rename = "booleanValue")]
    Boolean(bool),

    /// `{"integerValue": "42"}`, decimal string so no precision is lost
    #[serde(rename = "integerValue")]
    Integer(String),

    /// `{"doubleValue": 1.5}`
    #[serde(rename = "doubleValue")]
    Double(#[serde(with = "double")] f64),

    /// `{"arrayValue": {"values": [...]}}`
    #[serde(rename = "arrayValue")]
    Array(ArrayValue),

    /// `{"mapValue": {"fields": {...}}}`
    #[serde(rename = "mapValue")]
    Map(MapValue),

    /// `{"nullValue": null}`
    #[serde(rename = "nullValue")]
    Null(()),
}

impl EncodedValue {
    /// Wire tag of this value
    pub fn tag(&self) -> &'static str {
        match self {
            EncodedValue::String(_) => "stringValue",
            EncodedValue::Boolean(_) => "booleanValue",
            EncodedValue::Integer(_) => "integerValue",
            EncodedValue::Double(_) => "doubleValue",
            EncodedValue::Array(_) => "arrayValue",
            EncodedValue::Map(_) => "mapValue",
            EncodedValue::Null(()) => "nullValue",
        }
    }
}

/// Body of an `arrayValue`
///
/// The store omits `values` for an empty array, so it defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    /// Elements in order
    #[serde(default)]
    pub values: Vec<EncodedValue>,
}

/// Body of a `mapValue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    /// Encoded entries
    #[serde(default)]
    pub fields: BTreeMap<String, EncodedValue>,
}

/// A complete document body: `{"fields": {...}}`
///
/// Documents read back from the store carry extra top-level keys
/// (`name`, `createTime`, `updateTime`); those are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Encoded record fields
    #[serde(default)]
    pub fields: BTreeMap<String, EncodedValue>,
}

/// `doubleValue` payload: a JSON number, or a string for non-finite values
mod double {
    use docseed_core::SpecialFloatKind;
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(f: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        match SpecialFloatKind::of(*f) {
            Some(kind) => serializer.serialize_str(kind.to_wire_string()),
            None => serializer.serialize_f64(*f),
        }
    }

    // Read through serde_json::Value so arbitrary-precision numbers resolve
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| de::Error::custom(format!("invalid doubleValue: {}", n))),
            serde_json::Value::String(s) => SpecialFloatKind::from_wire_string(&s)
                .map(|kind| kind.to_f64())
                .ok_or_else(|| de::Error::custom(format!("invalid doubleValue: {}", s))),
            other => Err(de::Error::custom(format!("invalid doubleValue: {}", other))),
        }
    }
}
