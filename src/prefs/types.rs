//! Core types for the preference store

use super::error::{PrefsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar type a preference is stored as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Int,
    Float,
}

impl ValueType {
    pub const ALL: [ValueType; 3] = [ValueType::Text, ValueType::Int, ValueType::Float];

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Int => "int",
            ValueType::Float => "float",
        }
    }

    /// Value returned for a missing key when the caller gives no default
    pub fn default_value(&self) -> PrefValue {
        match self {
            ValueType::Text => PrefValue::Text(String::new()),
            ValueType::Int => PrefValue::Int(0),
            ValueType::Float => PrefValue::Float(0.0),
        }
    }

    /// Parse user-entered text as a value of this type
    ///
    /// Text is taken verbatim; numbers may carry surrounding whitespace.
    pub fn parse_value(&self, raw: &str) -> Result<PrefValue> {
        match self {
            ValueType::Text => Ok(PrefValue::Text(raw.to_string())),
            ValueType::Int => raw
                .trim()
                .parse::<i64>()
                .map(PrefValue::Int)
                .map_err(|_| PrefsError::invalid(format!("'{}' is not a valid integer", raw))),
            ValueType::Float => raw
                .trim()
                .parse::<f64>()
                .map(PrefValue::Float)
                .map_err(|_| PrefsError::invalid(format!("'{}' is not a valid floating point number", raw))),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => Ok(ValueType::Text),
            "int" | "integer" => Ok(ValueType::Int),
            "float" | "number" => Ok(ValueType::Float),
            other => Err(PrefsError::invalid(format!(
                "unknown type '{}' (expected text, int or float)",
                other
            ))),
        }
    }
}

/// A typed preference value; the variant doubles as the type tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrefValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl PrefValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            PrefValue::Text(_) => ValueType::Text,
            PrefValue::Int(_) => ValueType::Int,
            PrefValue::Float(_) => ValueType::Float,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PrefValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PrefValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PrefValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::Text(v) => f.write_str(v),
            PrefValue::Int(v) => write!(f, "{}", v),
            PrefValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Text(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Text(value.to_string())
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Int(value)
    }
}

impl From<f64> for PrefValue {
    fn from(value: f64) -> Self {
        PrefValue::Float(value)
    }
}

/// A key together with its stored value
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: PrefValue,
}

impl Entry {
    pub fn type_tag(&self) -> ValueType {
        self.value.value_type()
    }
}
