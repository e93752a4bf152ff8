//! JSON wire encoding for docseed values
//!
//! Every scalar and container is wrapped in an explicit type tag:
//!
//! - `{"stringValue": "..."}`, `{"booleanValue": b}`, `{"nullValue": null}`
//! - `{"integerValue": "<decimal>"}` for 64-bit integers
//! - `{"doubleValue": f}`, or `"NaN"` / `"Infinity"` / `"-Infinity"`
//! - `{"arrayValue": {"values": [...]}}`
//! - `{"mapValue": {"fields": {...}}}`
//!
//! A record becomes a [`Document`]: `{"fields": {...}}`.

mod decode;
mod encode;
mod model;

pub use decode::{
    decode_document, decode_fields, decode_value, document_to_record, parse_document, DecodeError,
};
pub use encode::{
    encode_document, encode_fields, encode_json, encode_value, to_json, to_json_pretty,
    EncodeError,
};
pub use model::{ArrayValue, Document, EncodedValue, MapValue};
