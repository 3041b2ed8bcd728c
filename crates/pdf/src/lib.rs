use std::path::Path;

use thiserror::Error;

use backend::{LopdfBackend, PdfBackend};

pub mod backend;
pub mod cleanup;
pub mod types;

pub use types::*;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Turns raw document bytes into the text of each page, in page order.
///
/// A page without extractable text yields an empty string.
pub trait TextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// [`TextExtractor`] backed by `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let backend = LopdfBackend::load_bytes(bytes)?;
        Ok(page_texts(&backend))
    }
}

// ---------------------------------------------------------------------------
// Convenience free functions (stateless, re-parse each call)
// ---------------------------------------------------------------------------

/// Extract the cleaned text of every page.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    LopdfExtractor.extract_pages(bytes)
}

/// Read a PDF from disk and extract the cleaned text of every page.
pub fn read_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let bytes = std::fs::read(path)?;
    extract_pages(&bytes)
}

/// Get document metadata without extracting any text.
pub fn info(bytes: &[u8]) -> Result<DocumentMetadata, ExtractionError> {
    let backend = LopdfBackend::load_bytes(bytes)?;
    Ok(extract_metadata(&backend))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Collect the text of every page in page order. A page whose text layer
/// cannot be decoded counts as empty.
fn page_texts(backend: &impl PdfBackend) -> Vec<String> {
    let pages = backend.pages();
    log::debug!("extracting text from {} pages", pages.len());

    pages
        .keys()
        .map(|&number| match backend.page_text(number) {
            Ok(text) => cleanup::cleanup_page_text(&text),
            Err(e) => {
                log::warn!("page {number} has no usable text: {e}");
                String::new()
            }
        })
        .collect()
}

fn extract_metadata(backend: &LopdfBackend) -> DocumentMetadata {
    let raw = backend.metadata();
    DocumentMetadata {
        title: raw.get("Title").cloned(),
        author: raw.get("Author").cloned(),
        page_count: backend.page_count(),
        creator: raw.get("Creator").cloned(),
        subject: raw.get("Subject").cloned(),
    }
}
