//! Reading and writing document files

use std::fs;
use std::path::Path;

use marginalia_core::document::Document;
use marginalia_core::error::{MarginaliaError, Result};
use tracing::debug;

/// Read a document file into memory
pub fn load(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .map_err(|e| MarginaliaError::io_operation("read", path.display(), e))?;
    debug!(path = %path.display(), bytes = text.len(), "load_document");
    Ok(Document::new(text))
}

/// Write a document back to its file
pub fn save(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, doc.text())
        .map_err(|e| MarginaliaError::io_operation("write", path.display(), e))?;
    debug!(path = %path.display(), bytes = doc.len(), "save_document");
    Ok(())
}
