//! Shared application state.

use std::collections::HashMap;

use complysum_analysis::AnalysisReport;
use complysum_core::Config;
use complysum_runtime::Analyzer;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A stored analysis: the report plus upload bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub page_count: usize,
    pub file_size: String,
    pub uploaded_at: String,
}

/// Shared application state accessible from all route handlers.
///
/// Analyses live in memory only; persistence is deliberately out of scope.
pub struct AppState {
    pub config: Config,
    pub analyzer: Analyzer,
    pub analyses: RwLock<HashMap<String, StoredAnalysis>>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Analyzer) -> Self {
        Self {
            config,
            analyzer,
            analyses: RwLock::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use complysum_summarize::NoopSummarizer;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_env(dir.path()).unwrap();
        let analyzer = Analyzer::new(Arc::new(NoopSummarizer));
        (AppState::new(config, analyzer), dir)
    }

    #[tokio::test]
    async fn test_store_and_delete_analysis() {
        let (state, _dir) = test_state();
        let report = state
            .analyzer
            .analyze("Audit de conformité du site.", "audit.pdf")
            .await
            .unwrap();

        let stored = StoredAnalysis {
            id: "doc-1".into(),
            report,
            page_count: 2,
            file_size: "12 KB".into(),
            uploaded_at: chrono::Utc::now().to_rfc3339(),
        };
        state.analyses.write().insert(stored.id.clone(), stored);

        assert!(state.analyses.read().contains_key("doc-1"));
        assert!(state.analyses.write().remove("doc-1").is_some());
        assert!(state.analyses.read().is_empty());
    }

    #[tokio::test]
    async fn test_stored_analysis_flattens_report_fields() {
        let (state, _dir) = test_state();
        let report = state
            .analyzer
            .analyze("Procédure de contrôle.", "p.pdf")
            .await
            .unwrap();

        let stored = StoredAnalysis {
            id: "doc-2".into(),
            report,
            page_count: 1,
            file_size: "1 KB".into(),
            uploaded_at: chrono::Utc::now().to_rfc3339(),
        };

        let json = serde_json::to_value(&stored).unwrap();
        // Report fields sit next to the bookkeeping fields, not nested
        assert_eq!(json["documentName"], "p.pdf");
        assert_eq!(json["pageCount"], 1);
        assert!(json["executiveSummary"].is_string());
        assert!(json.get("report").is_none());
    }
}
