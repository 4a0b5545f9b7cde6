//! Typed packet field values.
//!
//! The wire type of a field is a stored property of the variant: the
//! encoder, the structure formatter and slot updates all dispatch on
//! `ValueKind` rather than on whatever the caller happened to pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkoreError};

/// Wire type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
}

impl ValueKind {
    /// Type column shown next to each written row.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Integer => "Integer",
            ValueKind::Boolean => "Boolean",
        }
    }

    /// Descriptor tag: first letter of the low-level type name
    /// (`String`, `Int32`, `Boolean`), lowercased.
    pub fn type_char(self) -> char {
        match self {
            ValueKind::String => 's',
            ValueKind::Integer => 'i',
            ValueKind::Boolean => 'b',
        }
    }

    /// Inverse of [`ValueKind::type_char`].
    pub fn from_type_char(c: char) -> Option<Self> {
        match c {
            's' => Some(ValueKind::String),
            'i' => Some(ValueKind::Integer),
            'b' => Some(ValueKind::Boolean),
            _ => None,
        }
    }

    /// Parse user-entered text as a value of this kind.
    ///
    /// Integers are decimal `i32`; booleans accept `true`/`false` in any case.
    /// Strings are taken verbatim.
    pub fn parse(self, text: &str) -> Result<TypedValue> {
        match self {
            ValueKind::String => Ok(TypedValue::String(text.to_owned())),
            ValueKind::Integer => text
                .trim()
                .parse::<i32>()
                .map(TypedValue::Integer)
                .map_err(|e| SkoreError::InvalidArgument(format!("not an integer {text:?}: {e}"))),
            ValueKind::Boolean => {
                let t = text.trim();
                if t.eq_ignore_ascii_case("true") {
                    Ok(TypedValue::Boolean(true))
                } else if t.eq_ignore_ascii_case("false") {
                    Ok(TypedValue::Boolean(false))
                } else {
                    Err(SkoreError::InvalidArgument(format!("not a boolean {text:?}")))
                }
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One packet field.
///
/// Serialized externally tagged with lowercase keys:
/// `{"integer": 42}`, `{"boolean": true}`, `{"string": "hi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypedValue {
    String(String),
    Integer(i32),
    Boolean(bool),
}

impl TypedValue {
    /// The wire type this value encodes as.
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::String(_) => ValueKind::String,
            TypedValue::Integer(_) => ValueKind::Integer,
            TypedValue::Boolean(_) => ValueKind::Boolean,
        }
    }
}

/// Booleans render as `True`/`False`; rows and descriptors share this casing.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Integer(i) => write!(f, "{i}"),
            TypedValue::Boolean(true) => f.write_str("True"),
            TypedValue::Boolean(false) => f.write_str("False"),
        }
    }
}

impl From<i32> for TypedValue {
    fn from(v: i32) -> Self {
        TypedValue::Integer(v)
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        TypedValue::Boolean(v)
    }
}

impl From<&str> for TypedValue {
    fn from(v: &str) -> Self {
        TypedValue::String(v.to_owned())
    }
}

impl From<String> for TypedValue {
    fn from(v: String) -> Self {
        TypedValue::String(v)
    }
}
