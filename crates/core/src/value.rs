//! Value types for docseed records
//!
//! This module defines the closed [`Value`] type every record field is built
//! from. The enum has exactly 7 variants, one per wire tag the document
//! store understands.
//!
//! ## Contract
//!
//! - No implicit type coercions: `Bool(true)` is never `Int(1)`
//! - Floats compare as `f64` does
//! - Foreign input (JSON, TOML) is converted fail-fast; shapes the store
//!   cannot represent are rejected with a [`ValueError`]

use crate::error::ValueError;
use std::collections::HashMap;

/// A field value as the document store sees it
///
/// Each variant maps to one wire tag: `nullValue`, `booleanValue`,
/// `integerValue`, `doubleValue`, `stringValue`, `arrayValue` and
/// `mapValue`. Comparison never crosses variants, so `Int(1)` and
/// `Float(1.0)` differ. Floats compare as `f64` does.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null
    Null,

    /// `true` / `false`
    Bool(bool),

    /// Sent as a decimal string
    Int(i64),

    /// Any `f64`, including NaN and the infinities
    Float(f64),

    /// Text
    String(String),

    /// Items in insertion order
    Array(Vec<Value>),

    /// Nested fields
    Object(HashMap<String, Value>),
}

impl Value {
    /// Variant name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// True for [`Value::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if any
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// String payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Array items, if any
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Nested fields, if any
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get the special float kind if this is a non-finite float
    ///
    /// Non-finite doubles cannot be written as JSON numbers and travel as
    /// strings on the wire.
    pub fn special_float_kind(&self) -> Option<SpecialFloatKind> {
        match self {
            Value::Float(f) => SpecialFloatKind::of(*f),
            _ => None,
        }
    }
}

/// Kinds of non-finite float values
///
/// These use the proto3 JSON string forms inside `doubleValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFloatKind {
    /// IEEE-754 Not-a-Number
    NaN,
    /// IEEE-754 positive infinity
    PositiveInfinity,
    /// IEEE-754 negative infinity
    NegativeInfinity,
}

impl SpecialFloatKind {
    /// Classify a float, returning `None` for finite values
    pub fn of(f: f64) -> Option<Self> {
        if f.is_nan() {
            Some(SpecialFloatKind::NaN)
        } else if f == f64::INFINITY {
            Some(SpecialFloatKind::PositiveInfinity)
        } else if f == f64::NEG_INFINITY {
            Some(SpecialFloatKind::NegativeInfinity)
        } else {
            None
        }
    }

    /// Convert to wire encoding string
    pub fn to_wire_string(&self) -> &'static str {
        match self {
            SpecialFloatKind::NaN => "NaN",
            SpecialFloatKind::PositiveInfinity => "Infinity",
            SpecialFloatKind::NegativeInfinity => "-Infinity",
        }
    }

    /// Parse from wire encoding string
    pub fn from_wire_string(s: &str) -> Option<Self> {
        match s {
            "NaN" => Some(SpecialFloatKind::NaN),
            "Infinity" => Some(SpecialFloatKind::PositiveInfinity),
            "-Infinity" => Some(SpecialFloatKind::NegativeInfinity),
            _ => None,
        }
    }

    /// Convert to f64 value
    pub fn to_f64(&self) -> f64 {
        match self {
            SpecialFloatKind::NaN => f64::NAN,
            SpecialFloatKind::PositiveInfinity => f64::INFINITY,
            SpecialFloatKind::NegativeInfinity => f64::NEG_INFINITY,
        }
    }
}

// ============================================================================
// Native conversions
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

// ============================================================================
// Foreign input conversions (fail-fast)
// ============================================================================

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => json_number(n.to_string())?,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(
                arr.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, ValueError>>()?,
            ),
        })
    }
}

/// Classify a JSON number by its literal text.
///
/// A literal without a fraction or exponent is an integer and must fit in
/// an `i64`. Anything else is a double and must be finite.
fn json_number(literal: String) -> Result<Value, ValueError> {
    if literal.contains(|c| matches!(c, '.' | 'e' | 'E')) {
        match literal.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(ValueError::Unsupported(format!("number {}", literal))),
        }
    } else {
        literal
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ValueError::IntegerOutOfRange(literal))
    }
}

impl TryFrom<toml::Value> for Value {
    type Error = ValueError;

    fn try_from(value: toml::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Int(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => {
                return Err(ValueError::Unsupported(format!("datetime {}", dt)))
            }
            toml::Value::Array(arr) => Value::Array(
                arr.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            toml::Value::Table(table) => Value::Object(
                table
                    .into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, ValueError>>()?,
            ),
        })
    }
}
