//! glTF JSON chunk parsing
//!
//! The payload is first read into a generic [`Value`] so section presence and
//! accessor element types can be checked with precise errors, then projected
//! into the typed [`Document`].

use super::document::Document;
use super::types::ElementType;
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Top-level sections that must be present in strict mode.
pub const REQUIRED_SECTIONS: [&str; 5] = ["buffers", "bufferViews", "accessors", "scenes", "nodes"];

/// Options controlling how the JSON chunk is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Require every section in [`REQUIRED_SECTIONS`].
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Accept documents with any top-level section missing.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Parse a JSON chunk payload.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the payload is not UTF-8, otherwise the errors of
/// [`parse_document_str`].
pub fn parse_document(data: &[u8], options: &LoadOptions) -> Result<Document> {
    let text = std::str::from_utf8(data)?;
    parse_document_str(text, options)
}

/// Parse glTF JSON text.
///
/// # Errors
///
/// - [`Error::Json`] for malformed JSON or a field of the wrong JSON type
/// - [`Error::InvalidDocument`] if the root is not an object
/// - [`Error::EmptyDocument`] if the root object has no members
/// - [`Error::MissingSection`] for an absent required section in strict mode
/// - [`Error::UnknownElementType`] for an accessor `type` outside SCALAR/VECn/MATn
pub fn parse_document_str(text: &str, options: &LoadOptions) -> Result<Document> {
    // glb pads the JSON chunk to 4 bytes with spaces; some writers use NUL
    let text = text.trim_end_matches(['\0', ' ']);

    let mut root: Value = serde_json::from_str(text)?;
    strip_nulls(&mut root);

    let Value::Object(map) = &root else {
        return Err(Error::InvalidDocument {
            message: format!("expected a JSON object at the root, found {}", json_kind(&root)),
        });
    };
    if map.is_empty() {
        return Err(Error::EmptyDocument);
    }

    if options.strict {
        check_required_sections(map)?;
    }
    check_accessor_types(map)?;

    let document: Document = serde_json::from_value(root)?;

    tracing::debug!(
        "parsed document: {} buffers, {} views, {} accessors, {} meshes, {} nodes, vrm={}",
        document.buffers.len(),
        document.buffer_views.len(),
        document.accessors.len(),
        document.meshes.len(),
        document.nodes.len(),
        document.vrm().is_some()
    );

    Ok(document)
}

fn check_required_sections(root: &Map<String, Value>) -> Result<()> {
    for section in REQUIRED_SECTIONS {
        if !root.contains_key(section) {
            return Err(Error::MissingSection { section });
        }
    }
    Ok(())
}

fn check_accessor_types(root: &Map<String, Value>) -> Result<()> {
    let Some(Value::Array(accessors)) = root.get("accessors") else {
        return Ok(());
    };

    for (index, accessor) in accessors.iter().enumerate() {
        let value = match accessor.get("type") {
            Some(Value::String(tag)) if tag.parse::<ElementType>().is_ok() => continue,
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        return Err(Error::UnknownElementType { accessor: index, value });
    }
    Ok(())
}

/// Drop object members whose value is `null` so they take their defaults.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
