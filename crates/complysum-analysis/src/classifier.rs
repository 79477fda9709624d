//! Rule-based document classifier.
//!
//! All decisions are lexical: lowercase substring checks and a handful of
//! fixed regular expressions. `classify` is pure — identical text always
//! yields an identical profile.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::{DocumentProfile, DocumentType, RiskLevel, UrgencyLevel};
use crate::taxonomy;

/// Document type rules, evaluated in order — first match wins.
const TYPE_RULES: &[(&[&str], DocumentType)] = &[
    (&["contrat", "accord"], DocumentType::Contractual),
    (&["audit", "contrôle"], DocumentType::Audit),
    (&["norme", "standard"], DocumentType::Normative),
    (&["rapport", "analyse"], DocumentType::Analytical),
    (&["procédure", "processus"], DocumentType::Procedural),
];

const HIGH_RISK_TERMS: &[&str] = &["urgent", "critique", "grave", "immédiat", "danger"];
const MEDIUM_RISK_TERMS: &[&str] = &["important", "significatif", "attention", "surveillance"];
const URGENCY_TERMS: &[&str] = &["urgent", "immédiat", "critique", "prioritaire"];

/// Compliance issue rules: each pattern contributes at most its one label,
/// in declaration order.
static ISSUE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"non.{0,10}conforme", "Non-conformité détectée"),
        (r"manque.{0,10}documentation", "Documentation insuffisante"),
        (r"absence.{0,10}procédure", "Procédures manquantes"),
        (r"formation.{0,10}insuffisante", "Formation inadéquate"),
        (r"contrôle.{0,10}défaillant", "Contrôles défaillants"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("issue pattern"), label))
    .collect()
});

/// Key area checks: (keyword, alternate keyword, label), capped to 3 matches.
const KEY_AREA_RULES: &[(&str, &str, &str)] = &[
    ("sécurité", "protection", "la sécurité"),
    ("qualité", "performance", "la qualité"),
    ("formation", "compétence", "la formation"),
    ("documentation", "procédure", "la documentation"),
    ("surveillance", "monitoring", "la surveillance"),
];

/// Compute the structured profile for a document. Operates on a case-folded
/// copy of the text; the input is never mutated.
pub fn classify(text: &str) -> DocumentProfile {
    let lower = text.to_lowercase();

    DocumentProfile {
        document_type: identify_document_type(&lower),
        main_topics: extract_main_topics(&lower),
        risk_level: assess_risk_level(&lower),
        compliance_issues: identify_compliance_issues(&lower),
        key_areas: identify_key_areas(&lower),
        urgency_level: assess_urgency_level(&lower),
    }
}

fn identify_document_type(lower: &str) -> DocumentType {
    TYPE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, doc_type)| *doc_type)
        .unwrap_or(DocumentType::Regulatory)
}

fn extract_main_topics(lower: &str) -> Vec<&'static str> {
    taxonomy::CATEGORIES
        .iter()
        .filter(|category| category.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|category| category.label)
        .take(3)
        .collect()
}

fn assess_risk_level(lower: &str) -> RiskLevel {
    let high = HIGH_RISK_TERMS.iter().filter(|t| lower.contains(*t)).count();
    let medium = MEDIUM_RISK_TERMS
        .iter()
        .filter(|t| lower.contains(*t))
        .count();

    if high > 0 {
        RiskLevel::High
    } else if medium > 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn identify_compliance_issues(lower: &str) -> Vec<&'static str> {
    ISSUE_RULES
        .iter()
        .filter(|(pattern, _)| pattern.is_match(lower))
        .map(|(_, label)| *label)
        .collect()
}

fn identify_key_areas(lower: &str) -> Vec<&'static str> {
    KEY_AREA_RULES
        .iter()
        .filter(|(kw, alt, _)| lower.contains(kw) || lower.contains(alt))
        .map(|(_, _, label)| *label)
        .take(3)
        .collect()
}

fn assess_urgency_level(lower: &str) -> UrgencyLevel {
    let count = URGENCY_TERMS.iter().filter(|t| lower.contains(*t)).count();

    if count > 1 {
        UrgencyLevel::Strong
    } else if count > 0 {
        UrgencyLevel::Some
    } else {
        UrgencyLevel::None
    }
}
