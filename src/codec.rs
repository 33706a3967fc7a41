//! Conversion between JSON-like documents and YAML text.
//!
//! Documents are `serde_json` maps. Keys serialize in sorted order, so
//! [`to_yaml`] is deterministic for a given document.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A JSON-like mapping from string keys to values.
pub type Document = Map<String, Value>;

/// Serializes a document as YAML.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document cannot be represented in YAML.
pub fn to_yaml(document: &Document) -> Result<String> {
    serde_yaml::to_string(document).map_err(|e| Error::Parse { reason: e.to_string() })
}

/// Serializes an arbitrary JSON value, which must be an object.
///
/// # Errors
///
/// Returns [`Error::NotAMapping`] for anything but an object.
pub fn value_to_yaml(value: &Value) -> Result<String> {
    match value {
        Value::Object(document) => to_yaml(document),
        other => Err(Error::NotAMapping { found: type_name(other) }),
    }
}

/// Parses YAML text into a document.
///
/// Empty input, or input holding only comments, yields an empty document.
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed YAML and [`Error::NotAMapping`]
/// when the top level is not a mapping.
pub fn from_yaml(text: &str) -> Result<Document> {
    if text.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#')) {
        return Ok(Document::new());
    }
    let value: Value =
        serde_yaml::from_str(text).map_err(|e| Error::Parse { reason: e.to_string() })?;
    match value {
        Value::Object(document) => Ok(document),
        Value::Null => Ok(Document::new()),
        other => Err(Error::NotAMapping { found: type_name(&other) }),
    }
}

/// Parses JSON text into a document.
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed JSON and [`Error::NotAMapping`]
/// when the top level is not an object.
pub fn from_json(text: &str) -> Result<Document> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::Parse { reason: e.to_string() })?;
    match value {
        Value::Object(document) => Ok(document),
        other => Err(Error::NotAMapping { found: type_name(&other) }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
