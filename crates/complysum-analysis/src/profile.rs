//! Document profile — the structured output of the classifier.

use serde::{Deserialize, Serialize};

/// Document type, decided by the first matching classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Contractual,
    Audit,
    Normative,
    Analytical,
    Procedural,
    Regulatory,
}

impl DocumentType {
    /// French label used in composed sentences ("une analyse {label}").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contractual => "contractuelle",
            Self::Audit => "d'audit",
            Self::Normative => "normative",
            Self::Analytical => "analytique",
            Self::Procedural => "procédurale",
            Self::Regulatory => "réglementaire",
        }
    }
}

/// Risk tier derived from the high/medium risk vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// French article phrase used in summary templates ("{phrase} niveau de risque").
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Low => "un faible",
            Self::Medium => "un moyen",
            Self::High => "un haut",
        }
    }
}

/// Urgency tier derived from the urgency vocabulary.
///
/// Every tier carries a non-empty quantifier token: the zero-match tier still
/// reads "Plusieurs" in the composed summary. The token is grammar, not a
/// severity signal — scoring must not key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    None,
    Some,
    Strong,
}

impl UrgencyLevel {
    /// French quantifier opening the recommendation sentence.
    pub fn quantifier(&self) -> &'static str {
        match self {
            Self::None => "Plusieurs",
            Self::Some => "Certaines",
            Self::Strong => "Des",
        }
    }
}

/// Structured profile of a document, computed once per analysis and reused
/// by the summary composer, key-point extractor, action engine, and scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProfile {
    pub document_type: DocumentType,
    /// Up to 3 taxonomy category labels, in category declaration order.
    pub main_topics: Vec<&'static str>,
    pub risk_level: RiskLevel,
    /// Up to 5 issue labels, in rule declaration order.
    pub compliance_issues: Vec<&'static str>,
    /// Up to 3 key area labels, in check order.
    pub key_areas: Vec<&'static str>,
    pub urgency_level: UrgencyLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_quantifier_never_empty() {
        for level in [UrgencyLevel::None, UrgencyLevel::Some, UrgencyLevel::Strong] {
            assert!(!level.quantifier().is_empty());
        }
    }

    #[test]
    fn test_document_type_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentType::Regulatory).unwrap();
        assert_eq!(json, "\"regulatory\"");
    }
}
