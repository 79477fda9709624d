//! Document text extraction — PDF first, plain-text fallback.

use complysum_core::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Estimated characters per page for plain-text documents.
const CHARS_PER_PAGE: usize = 3000;

/// Text and page count extracted from an uploaded document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub pages: usize,
}

/// Extract text from a document on disk.
pub fn extract_document(path: &Path) -> Result<ExtractedDocument> {
    let bytes = std::fs::read(path)?;
    extract_from_bytes(&bytes)
}

/// Extract text from raw document bytes.
///
/// Tries PDF extraction first; when that fails, treats the bytes as UTF-8
/// text with an estimated page count. Fails only when neither path yields
/// non-blank text.
pub fn extract_from_bytes(bytes: &[u8]) -> Result<ExtractedDocument> {
    match extract_pdf(bytes) {
        Ok(doc) => return Ok(doc),
        Err(e) => {
            warn!("PDF extraction failed ({}), falling back to plain text", e);
        }
    }

    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        return Err(Error::Extraction(
            "impossible d'extraire le texte du document".to_string(),
        ));
    }

    let pages = estimate_pages(&text);
    debug!("Treated document as plain text ({} estimated pages)", pages);
    Ok(ExtractedDocument {
        text: text.into_owned(),
        pages,
    })
}

fn extract_pdf(bytes: &[u8]) -> Result<ExtractedDocument> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(Error::Extraction("PDF sans texte extractible".to_string()));
    }

    // pdf-extract does not report page counts; read the page tree separately
    let pages = lopdf::Document::load_mem(bytes)
        .map(|doc| doc.get_pages().len())
        .unwrap_or_else(|_| estimate_pages(&text));

    Ok(ExtractedDocument { text, pages })
}

fn estimate_pages(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_PAGE).max(1)
}
