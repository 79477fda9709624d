//! ComplySummarize Summarize — remote summarization with graceful absence.
//!
//! Provides the `SummaryBackend` trait. `RemoteSummarizer` calls a hosted
//! summarization model; any failure (network, timeout, non-2xx, malformed
//! payload) is reported as `None` so the pipeline always has a fallback.

pub mod backend;
pub mod remote;

pub use backend::{NoopSummarizer, SummaryBackend};
pub use remote::RemoteSummarizer;
