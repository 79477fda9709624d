//! ComplySummarize Runtime — pipeline orchestration.

pub mod orchestrator;

pub use orchestrator::Analyzer;
