//! Summarization backend trait and the no-op fallback.

use async_trait::async_trait;

/// Trait for summarization backends.
///
/// Failure is always expressed as `None`: callers fall back to the local
/// summary composer unconditionally and never see an error.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Summarize a normalized text. Returns `None` when no usable summary
    /// could be produced for any reason.
    async fn summarize(&self, text: &str) -> Option<String>;

    /// Whether this backend can produce summaries at all.
    fn is_available(&self) -> bool;
}

/// Backend that never produces a summary (local-only mode, test double).
pub struct NoopSummarizer;

#[async_trait]
impl SummaryBackend for NoopSummarizer {
    async fn summarize(&self, _text: &str) -> Option<String> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}
