//! # shapeguard-core — Structural Schemas and the Matcher
//!
//! Defines the schema language used to describe the expected shape of a
//! runtime value, and the recursive matcher that decides whether a
//! `serde_json::Value` conforms to it.
//!
//! ## Schema Variants
//!
//! A [`Schema`] is one of three variants, fixed when it is constructed:
//!
//! - **Primitive**: a [`PrimitiveKind`] tag such as `"number"`. Matches
//!   when the runtime kind of the value equals the tag. No coercion: the
//!   string `"42"` is not a number.
//! - **Sequence**: `["<inner>"]`. Matches any array whose every element
//!   matches the inner schema. The empty array always matches.
//! - **Structure**: `{"field": <schema>, ...}`. Matches any object that
//!   carries at least the listed fields, each matching its nested schema.
//!   Extra fields on the value are ignored.
//!
//! Schema literals are decoded with [`Schema::from_json`]. Literals that
//! describe none of the variants are rejected with a [`SchemaError`] at
//! decode time instead of silently failing every match later.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shapeguard-*` crates (this is the leaf).
//! - Matching is total: [`matches`] never panics and never errors.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod matcher;
pub mod pointer;
pub mod render;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use error::SchemaError;
pub use kind::{PrimitiveKind, PRIMITIVE_KIND_COUNT};
pub use matcher::{find_mismatch, matches, matches_field, Mismatch};
pub use render::{render_value, DefaultRendering};
pub use schema::Schema;
