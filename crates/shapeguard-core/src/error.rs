//! # Schema Errors
//!
//! Errors raised while decoding a schema literal. Matching itself never
//! fails; every problem with a schema surfaces here, at construction.
//!
//! Each variant carries the JSON Pointer of the offending node inside the
//! literal. The empty pointer is the root and displays as `(root)`.

use thiserror::Error;

/// Error decoding a schema literal into a [`Schema`](crate::Schema).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A string tag that names no [`PrimitiveKind`](crate::PrimitiveKind).
    #[error("unknown primitive kind {tag:?} at {}", at(.path))]
    UnknownKind {
        /// The unrecognized tag.
        tag: String,
        /// JSON Pointer to the tag within the literal.
        path: String,
    },

    /// A sequence schema with no inner schema.
    #[error("sequence schema at {} has no element schema", at(.path))]
    EmptySequence {
        /// JSON Pointer to the empty array within the literal.
        path: String,
    },

    /// A literal that is not a string, array, or object.
    #[error("unrecognized schema shape at {}: {found}", at(.path))]
    UnrecognizedShape {
        /// JSON Pointer to the node within the literal.
        path: String,
        /// Compact rendering of the rejected node.
        found: String,
    },

    /// Schema text that does not parse as JSON.
    #[error("schema literal is not valid JSON: {0}")]
    InvalidJson(String),
}

fn at(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}
