//! # Structural Matcher
//!
//! Recursive descent over a [`Schema`], dispatching on its variant:
//!
//! - **Primitive**: the value's [`PrimitiveKind`] equals the tag.
//! - **Sequence**: the value is an array and every element matches the
//!   inner schema. `[]` matches any sequence schema.
//! - **Structure**: the value is an object and, for every schema field,
//!   the value's field is present and matches. Extra value fields are
//!   ignored. A missing field is "absent" and never matches.
//!
//! Recursion depth is bounded by [`Schema::depth`]; values are never
//! traversed deeper than the schema describes.
//!
//! [`find_mismatch`] walks the same path as [`matches`] but reports where
//! the first failure happened, for diagnostics.

use std::fmt;

use serde_json::Value;

use crate::kind::PrimitiveKind;
use crate::pointer;
use crate::schema::Schema;

/// Whether `value` conforms to `schema`. Total: never panics, never errors.
pub fn matches(value: &Value, schema: &Schema) -> bool {
    match schema {
        Schema::Primitive(kind) => PrimitiveKind::of(value) == *kind,
        Schema::Sequence(element) => match value {
            Value::Array(items) => items.iter().all(|item| matches(item, element)),
            _ => false,
        },
        Schema::Structure(fields) => match value {
            Value::Object(map) => fields
                .iter()
                .all(|(key, nested)| matches_field(map.get(key), nested)),
            _ => false,
        },
    }
}

/// Match a possibly-absent structure field. `None` matches nothing.
pub fn matches_field(value: Option<&Value>, schema: &Schema) -> bool {
    value.is_some_and(|v| matches(v, schema))
}

/// Location and cause of the first structural mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// JSON Pointer to the failing node in the value. Empty for the root.
    pub path: String,
    /// Compact literal of the schema the node failed against.
    pub expected: String,
    /// Runtime kind of the node, or `absent` for a missing field.
    pub found: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            self.path.as_str()
        };
        write!(
            f,
            "{path}: expected {}, found {}",
            self.expected, self.found
        )
    }
}

/// First mismatch between `value` and `schema`, or `None` when they match.
///
/// Structure fields are visited in key order and sequence elements in
/// ascending index order; the deepest failing node on the first failing
/// branch is reported. `find_mismatch(v, s).is_none() == matches(v, s)`.
pub fn find_mismatch(value: &Value, schema: &Schema) -> Option<Mismatch> {
    locate(Some(value), schema, "")
}

fn locate(value: Option<&Value>, schema: &Schema, path: &str) -> Option<Mismatch> {
    let Some(value) = value else {
        return Some(mismatch(path, schema, "absent"));
    };
    match (schema, value) {
        (Schema::Primitive(kind), _) => {
            let found = PrimitiveKind::of(value);
            (found != *kind).then(|| mismatch(path, schema, found.as_str()))
        }
        (Schema::Sequence(element), Value::Array(items)) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| locate(Some(item), element, &pointer::index(path, i))),
        (Schema::Structure(fields), Value::Object(map)) => fields
            .iter()
            .find_map(|(key, nested)| locate(map.get(key), nested, &pointer::child(path, key))),
        (Schema::Sequence(_) | Schema::Structure(_), _) => {
            Some(mismatch(path, schema, PrimitiveKind::of(value).as_str()))
        }
    }
}

fn mismatch(path: &str, schema: &Schema, found: &str) -> Mismatch {
    Mismatch {
        path: path.to_string(),
        expected: schema.to_string(),
        found: found.to_string(),
    }
}
