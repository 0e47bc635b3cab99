//! PDF → plain text, page order preserved.

use std::path::Path;

use tracing::debug;

use crate::errors::EngineError;

/// Extracts the text of every page and concatenates them with one newline
/// between pages. Pages with no extractable text contribute nothing.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, EngineError> {
    let pages = pdf_extract::extract_text_by_pages(path.as_ref())
        .map_err(|e| EngineError::DocumentRead(e.to_string()))?;
    Ok(join_pages(pages))
}

/// Same as [`extract_text`] for an in-memory document.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, EngineError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| EngineError::DocumentRead(e.to_string()))?;
    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    let kept: Vec<&str> = pages
        .iter()
        .map(|p| p.as_str())
        .filter(|p| !p.trim().is_empty())
        .collect();
    debug!(
        total_pages = pages.len(),
        text_pages = kept.len(),
        "extracted document text"
    );
    kept.join("\n")
}
