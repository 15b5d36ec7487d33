//! Scalar value types for feature sets and predicate references
//!
//! The `Value` enum represents a single feature value supplied by a caller,
//! or the typed reference value a predicate compares against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value
///
/// Booleans deserialize as the text `"true"` or `"false"`, the literal form
/// PMML uses for boolean fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "WireValue")]
pub enum Value {
    /// Missing value, equivalent to an absent field
    Missing,
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<WireValue> for Value {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Missing => Value::Missing,
            WireValue::Bool(b) => Value::Text(b.to_string()),
            WireValue::Number(n) => Value::Number(n),
            WireValue::Text(s) => Value::Text(s),
        }
    }
}

impl Value {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Name of the variant, used in type mismatch messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }

    /// Canonical text form.
    ///
    /// Numbers use the shortest decimal representation that round-trips,
    /// never in exponent notation, so `1.0` renders as `"1"`.
    pub fn canonical(&self) -> String {
        match self {
            Value::Missing => String::new(),
            Value::Number(n) => format!("{}", n),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.write_str("<missing>"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Missing)
    }
}
