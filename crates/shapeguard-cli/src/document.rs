//! # Document Loading
//!
//! Reads schema literals and values from disk. Files ending in `.yaml` or
//! `.yml` are deserialized as YAML straight into the JSON data model; every
//! other file is parsed as JSON. YAML mapping keys must be strings.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use shapeguard_core::Schema;

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON text.
    Json,
    /// YAML text, converted to the JSON data model.
    Yaml,
}

impl Format {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse document text in the given format.
pub fn parse_document(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => serde_json::from_str(content).context("invalid JSON"),
        Format::Yaml => serde_yaml::from_str(content).context("invalid YAML"),
    }
}

/// Read and parse a document file.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_document(&content, Format::from_path(path))
        .with_context(|| format!("cannot parse {}", path.display()))
}

/// Load a single schema literal.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let literal = load_document(path)?;
    Schema::from_json(&literal).with_context(|| format!("invalid schema in {}", path.display()))
}

/// Load a file holding an array of schema literals.
pub fn load_schema_list(path: &Path) -> Result<Vec<Schema>> {
    let items = load_array(path)?;
    items
        .iter()
        .enumerate()
        .map(|(i, literal)| {
            Schema::from_json(literal)
                .with_context(|| format!("invalid schema at position {i} in {}", path.display()))
        })
        .collect()
}

/// Load a file holding an array of argument values.
pub fn load_argument_list(path: &Path) -> Result<Vec<Value>> {
    load_array(path)
}

fn load_array(path: &Path) -> Result<Vec<Value>> {
    match load_document(path)? {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{} must contain an array, found {}",
            path.display(),
            shapeguard_core::PrimitiveKind::of(&other)
        ),
    }
}
