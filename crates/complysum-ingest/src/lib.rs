//! ComplySummarize Ingest — document text acquisition and normalization.

pub mod file;
pub mod normalize;

pub use file::{extract_document, extract_from_bytes, ExtractedDocument};
