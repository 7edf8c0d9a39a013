//! glTF document JSON export
//!
//! Only the JSON document is written; the binary container is read-only.

use super::document::Document;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write a document to disk as indented JSON.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_document_json<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let json = serialize_document(doc)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a document to indented JSON.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_document(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serialize a document to single-line JSON.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_document_compact(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string(doc)?)
}
