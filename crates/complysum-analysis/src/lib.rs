//! ComplySummarize Analysis — the pure document-analysis pipeline.
//!
//! Every function here is deterministic and total: classification,
//! key-point extraction, action generation, and scoring never fail and
//! never touch the network. The single side-effecting step (remote
//! summarization) lives in `complysum-summarize`; sequencing lives in
//! `complysum-runtime`.

pub mod actions;
pub mod classifier;
pub mod keypoints;
pub mod profile;
pub mod report;
pub mod scoring;
pub mod summary;
pub mod taxonomy;

pub use actions::{ActionSuggestion, Priority};
pub use profile::{DocumentProfile, DocumentType, RiskLevel, UrgencyLevel};
pub use report::{AnalysisReport, ReportMetadata, ANALYSIS_DEPTH, MODEL_LABEL};
pub use scoring::QualityMetrics;
