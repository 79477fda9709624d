//! Quality scoring — confidence and compliance-score metrics.

use crate::profile::{DocumentProfile, RiskLevel};
use crate::taxonomy;

/// Confidence never exceeds this, however keyword-dense the document.
const MAX_CONFIDENCE: f64 = 98.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityMetrics {
    /// 0..=98.
    pub confidence_percent: u8,
    /// 0..=100.
    pub compliance_score: u8,
}

/// Derive quality metrics from the text and an already-computed profile.
/// Pure: no external calls, no randomness.
pub fn score(text: &str, profile: &DocumentProfile) -> QualityMetrics {
    QualityMetrics {
        confidence_percent: confidence(text),
        compliance_score: compliance_score(profile),
    }
}

fn confidence(text: &str) -> u8 {
    let mut confidence = 85.0;

    let len = text.chars().count();
    if len > 1000 {
        confidence += 5.0;
    }
    if len > 3000 {
        confidence += 5.0;
    }

    // Up to 10 points proportional to taxonomy keyword density
    confidence += (keyword_density(text) * 2.0).min(10.0);

    confidence.min(MAX_CONFIDENCE).round() as u8
}

/// Percentage of distinct taxonomy keywords present in the text.
fn keyword_density(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let found = taxonomy::all_keywords()
        .filter(|kw| lower.contains(kw))
        .count();
    found as f64 / taxonomy::keyword_count() as f64 * 100.0
}

fn compliance_score(profile: &DocumentProfile) -> u8 {
    let mut score: i32 = 60;

    if profile.compliance_issues.is_empty() {
        score += 20;
    } else {
        score -= profile.compliance_issues.len() as i32 * 5;
    }

    score += match profile.risk_level {
        RiskLevel::Low => 15,
        RiskLevel::Medium => 5,
        RiskLevel::High => 0,
    };

    if profile.key_areas.len() > 2 {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_baseline_confidence_without_keywords() {
        let text = "Court texte sans vocabulaire particulier.";
        let metrics = score(text, &classify(text));
        assert_eq!(metrics.confidence_percent, 85);
    }

    #[test]
    fn test_clean_document_gets_both_bonuses() {
        // 60 + 20 (no issues) + 15 (low risk) = 95
        let text = "Court texte sans vocabulaire particulier.";
        let metrics = score(text, &classify(text));
        assert_eq!(metrics.compliance_score, 95);
    }

    #[test]
    fn test_issues_penalize_compliance_score() {
        let text = "Constat urgent: le site est non conforme aux règles.";
        let profile = classify(text);
        let metrics = score(text, &profile);
        // 60 - 5 (one issue) + 0 (high risk) = 55
        assert_eq!(metrics.compliance_score, 55);
        assert!(metrics.compliance_score < 60);
    }

    #[test]
    fn test_length_bonuses() {
        let long = format!("mot {}", "bla ".repeat(300));
        assert_eq!(confidence(&long), 90);
        let very_long = format!("mot {}", "bla ".repeat(800));
        assert_eq!(confidence(&very_long), 95);
    }

    #[test]
    fn test_density_bonus_is_capped() {
        // Every keyword present: density bonus saturates at 10
        let all: String = taxonomy::all_keywords().collect::<Vec<_>>().join(" ");
        let short_dense = confidence(&all);
        assert_eq!(short_dense, 95);
    }

    #[test]
    fn test_confidence_never_exceeds_98() {
        let dense: String = taxonomy::all_keywords()
            .collect::<Vec<_>>()
            .join(" ")
            .repeat(40);
        assert!(confidence(&dense) <= 98);
    }

    #[test]
    fn test_bounds() {
        for text in ["", "urgent non conforme manque documentation absence procédure \
                      formation insuffisante contrôle défaillant"] {
            let metrics = score(text, &classify(text));
            assert!(metrics.confidence_percent <= 98);
            assert!(metrics.compliance_score <= 100);
        }
    }
}
