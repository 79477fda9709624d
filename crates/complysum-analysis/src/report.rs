//! Final analysis report — the one artifact handed back to callers.

use serde::{Deserialize, Serialize};

use crate::actions::ActionSuggestion;
use crate::profile::{DocumentType, RiskLevel};

/// Fixed provenance label: remote summary when available, local otherwise.
pub const MODEL_LABEL: &str = "IA Hybride (Résumé distant + Analyse lexicale)";

/// Fixed depth marker reported in metadata.
pub const ANALYSIS_DEPTH: &str = "Approfondie";

/// Structured compliance report produced once per document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub document_name: String,
    pub processed_at: String,
    pub executive_summary: String,
    /// 1..=5 entries, each at most 200 chars.
    pub key_points: Vec<String>,
    /// 0..=5 entries, highest priority first.
    pub action_suggestions: Vec<ActionSuggestion>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub processing_time_seconds: f64,
    pub model_label: String,
    /// 0..=98.
    pub confidence_percent: u8,
    pub document_type: DocumentType,
    pub risk_level: RiskLevel,
    /// 0..=100.
    pub compliance_score: u8,
    pub text_length: usize,
    pub analysis_depth: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AnalysisReport {
            document_name: "audit.pdf".into(),
            processed_at: "01/01/2026 12:00:00".into(),
            executive_summary: "Résumé.".into(),
            key_points: vec!["Point clé suffisamment long".into()],
            action_suggestions: vec![],
            metadata: ReportMetadata {
                processing_time_seconds: 0.3,
                model_label: MODEL_LABEL.into(),
                confidence_percent: 85,
                document_type: DocumentType::Audit,
                risk_level: RiskLevel::Low,
                compliance_score: 95,
                text_length: 120,
                analysis_depth: ANALYSIS_DEPTH.into(),
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["documentName"], "audit.pdf");
        assert_eq!(json["metadata"]["confidencePercent"], 85);
        assert_eq!(json["metadata"]["documentType"], "audit");
        assert_eq!(json["metadata"]["riskLevel"], "low");
    }
}
