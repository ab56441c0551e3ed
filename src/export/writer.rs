// ABOUTME: Serializes the export document to pretty-printed JSON on disk
// ABOUTME: Single whole-file write, overwriting any existing output without confirmation

use crate::export::ExportDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize the document and write it to the output path
///
/// The document is rendered as UTF-8 JSON with 2-space indentation and
/// written in a single call once serialization has fully succeeded, so a
/// serialization failure never leaves a truncated file behind. An existing
/// file at the path is overwritten.
///
/// # Arguments
///
/// * `document` - Fully assembled export document
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
/// (permissions, missing parent directory, disk full).
pub fn write_document(document: ExportDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&document.into_json())
        .context("Failed to serialize export document to JSON")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write export file '{}'", path.display()))?;

    tracing::debug!("Wrote export document to {}", path.display());
    Ok(())
}
