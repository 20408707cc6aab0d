//! # Schema
//!
//! The structural description a value is matched against. A schema is a
//! closed sum type decided at construction, so the matcher is a single
//! exhaustive `match` with no shape probing at match time.
//!
//! ## Literal Form
//!
//! Schemas are usually written as JSON literals:
//!
//! ```json
//! {
//!   "user": {
//!     "id": "number",
//!     "hobbies": ["string"]
//!   }
//! }
//! ```
//!
//! [`Schema::from_json`] decodes such a literal. Only the first element of
//! a sequence literal is read; sibling elements are ignored. A literal
//! that is not a string, non-empty array, or object is rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::kind::PrimitiveKind;
use crate::pointer;

/// Expected shape of a value.
///
/// Schemas are immutable and carry no identity. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Schema {
    /// The value's runtime kind must equal this tag.
    Primitive(PrimitiveKind),
    /// The value must be an array whose every element matches the inner schema.
    Sequence(Box<Schema>),
    /// The value must be an object carrying at least these fields, each
    /// matching its schema. Fields are kept in key order.
    Structure(BTreeMap<String, Schema>),
}

impl Schema {
    /// Primitive schema for `kind`.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// Shorthand for `Schema::primitive(PrimitiveKind::Number)`.
    pub fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    /// Shorthand for `Schema::primitive(PrimitiveKind::String)`.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    /// Shorthand for `Schema::primitive(PrimitiveKind::Boolean)`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    /// Homogeneous sequence of `element`.
    pub fn sequence(element: Schema) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// Structure requiring each `(field, schema)` pair. A repeated field
    /// keeps the last schema given for it.
    pub fn structure<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Self::Structure(
            fields
                .into_iter()
                .map(|(key, schema)| (key.into(), schema))
                .collect(),
        )
    }

    /// Decode a schema literal.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::UnknownKind`] for a string that is not a primitive tag.
    /// - [`SchemaError::EmptySequence`] for `[]`.
    /// - [`SchemaError::UnrecognizedShape`] for `null`, numbers, and booleans.
    ///
    /// The error path points at the first offending node, visiting
    /// structure fields in key order.
    pub fn from_json(literal: &Value) -> Result<Self, SchemaError> {
        decode(literal, "")
    }

    /// Encode back to the literal form accepted by [`Schema::from_json`].
    pub fn to_json(&self) -> Value {
        match self {
            Self::Primitive(kind) => Value::String(kind.as_str().to_string()),
            Self::Sequence(element) => Value::Array(vec![element.to_json()]),
            Self::Structure(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, schema)| (key.clone(), schema.to_json()))
                    .collect(),
            ),
        }
    }

    /// Nesting depth: 1 for a primitive, plus one per sequence or structure
    /// level. An empty structure has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Primitive(_) => 1,
            Self::Sequence(element) => 1 + element.depth(),
            Self::Structure(fields) => {
                1 + fields.values().map(Schema::depth).max().unwrap_or(0)
            }
        }
    }

    /// Whether `value` conforms to this schema. See [`crate::matches`].
    pub fn matches(&self, value: &Value) -> bool {
        crate::matcher::matches(value, self)
    }
}

fn decode(literal: &Value, path: &str) -> Result<Schema, SchemaError> {
    match literal {
        Value::String(tag) => tag
            .parse::<PrimitiveKind>()
            .map(Schema::Primitive)
            .map_err(|_| SchemaError::UnknownKind {
                tag: tag.clone(),
                path: path.to_string(),
            }),
        Value::Array(items) => {
            let Some(first) = items.first() else {
                return Err(SchemaError::EmptySequence {
                    path: path.to_string(),
                });
            };
            if items.len() > 1 {
                tracing::debug!(
                    path = %path,
                    ignored = items.len() - 1,
                    "sequence schema has sibling elements; only the first is used"
                );
            }
            let element = decode(first, &pointer::index(path, 0))?;
            Ok(Schema::sequence(element))
        }
        Value::Object(map) => {
            let mut fields = BTreeMap::new();
            // serde_json's map may preserve insertion order; sort so the
            // reported error path is deterministic.
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                let nested = decode(&map[key.as_str()], &pointer::child(path, key))?;
                fields.insert(key.clone(), nested);
            }
            Ok(Schema::Structure(fields))
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => Err(SchemaError::UnrecognizedShape {
            path: path.to_string(),
            found: literal.to_string(),
        }),
    }
}

impl From<PrimitiveKind> for Schema {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(literal: Value) -> Result<Self, Self::Error> {
        Self::from_json(&literal)
    }
}

impl From<Schema> for Value {
    fn from(schema: Schema) -> Self {
        schema.to_json()
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    /// Parse schema literal text, e.g. `{"id": "number"}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal: Value =
            serde_json::from_str(s).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        Self::from_json(&literal)
    }
}

impl fmt::Display for Schema {
    /// Compact literal form, e.g. `{"id":"number"}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
