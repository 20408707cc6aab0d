//! # Primitive Kinds
//!
//! The closed set of runtime kinds a primitive schema tag may name. Every
//! `serde_json::Value` has exactly one kind, so a primitive schema match is
//! a single equality test on [`PrimitiveKind::of`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::SchemaError;

/// Runtime kind of a value, usable as a primitive schema tag.
///
/// | Tag | Matches |
/// |-----|---------|
/// | `null` | `null` |
/// | `boolean` | `true`, `false` |
/// | `number` | any JSON number, integer or float |
/// | `string` | any string, including numeric text |
/// | `array` | any array, contents unchecked |
/// | `object` | any object, contents unchecked; never `null` or an array |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// The `null` value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// Any string.
    String,
    /// Any array.
    Array,
    /// Any object.
    Object,
}

/// Number of primitive kinds.
pub const PRIMITIVE_KIND_COUNT: usize = 6;

impl PrimitiveKind {
    /// Returns every kind in declaration order.
    pub fn all() -> &'static [PrimitiveKind] {
        &[
            Self::Null,
            Self::Boolean,
            Self::Number,
            Self::String,
            Self::Array,
            Self::Object,
        ]
    }

    /// Runtime kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// The tag string used in schema literals.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = SchemaError;

    /// Parse a tag exactly as produced by [`PrimitiveKind::as_str()`].
    /// Case-sensitive: `"Number"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "boolean" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(SchemaError::UnknownKind {
                tag: other.to_string(),
                path: String::new(),
            }),
        }
    }
}
