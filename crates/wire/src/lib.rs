//! Wire encoding for docseed
//!
//! This crate implements the document store's field-tagged JSON format.
//! Each value is wrapped in an explicit type tag, and a record is sent as a
//! document body under a top-level `fields` key.
//!
//! ## Wire Encoding Rules
//!
//! | Value Type | JSON Encoding |
//! |------------|--------------|
//! | Null | `{"nullValue": null}` |
//! | Bool | `{"booleanValue": true}` |
//! | Int | `{"integerValue": "42"}` |
//! | Float (finite) | `{"doubleValue": 1.5}` |
//! | Float (non-finite) | `{"doubleValue": "NaN"}` |
//! | String | `{"stringValue": "..."}` |
//! | Array | `{"arrayValue": {"values": [...]}}` |
//! | Object | `{"mapValue": {"fields": {...}}}` |
//!
//! ## Examples
//!
//! ```
//! use docseed_wire::{decode_document, encode_json};
//! use docseed_core::Record;
//!
//! let record = Record::new().with("capacidad", 20i64);
//! let json = encode_json(&record).unwrap();
//! assert_eq!(json, r#"{"fields":{"capacidad":{"integerValue":"20"}}}"#);
//!
//! assert_eq!(decode_document(&json).unwrap(), record);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_document, decode_fields, decode_value, document_to_record, encode_document,
    encode_fields, encode_json, encode_value, parse_document, to_json, to_json_pretty, ArrayValue,
    DecodeError, Document, EncodeError, EncodedValue, MapValue,
};
