//! Key-point extraction — sentence-importance ranking plus pattern extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::DocumentProfile;
use crate::taxonomy;

/// Minimum candidate sentence length, in chars.
const MIN_SENTENCE_CHARS: usize = 30;
/// Candidates at or under this length are discarded during the merge.
const MIN_POINT_CHARS: usize = 20;
/// Final key points are clipped to this many chars (197 + ellipsis).
const MAX_POINT_CHARS: usize = 200;

const IMPORTANCE_INDICATORS: &[&str] = &[
    "doit",
    "obligatoire",
    "exigé",
    "requis",
    "nécessaire",
    "important",
];

/// Compliance-specific extractions: (pattern, static label).
static COMPLIANCE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"(?i)(?:conformité|conforme).{0,100}(?:exigence|obligation|norme)",
            "Exigences de conformité identifiées",
        ),
        (
            r"(?i)(?:audit|contrôle).{0,100}(?:révèle|montre|indique)",
            "Résultats d'audit et de contrôle",
        ),
        (
            r"(?i)(?:risque|danger).{0,100}(?:identifié|détecté|observé)",
            "Risques de conformité identifiés",
        ),
        (
            r"(?i)(?:formation|sensibilisation).{0,100}(?:personnel|équipe|collaborateur)",
            "Besoins de formation du personnel",
        ),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("compliance pattern"), label))
    .collect()
});

static RISK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:risque élevé|haut risque|risque critique).{0,100}",
        r"(?i)(?:non-conformité|défaillance|manquement).{0,100}",
        r"(?i)(?:incident|accident|problème).{0,100}(?:sécurité|conformité)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("risk pattern"))
    .collect()
});

static REQUIREMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:doit|devra|obligation de).{0,100}",
        r"(?i)(?:exigence|requirement).{0,100}",
        r"(?i)(?:mise en œuvre|implémentation).{0,100}(?:obligatoire|requise)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("requirement pattern"))
    .collect()
});

/// Extract 1..=5 key points from a document.
///
/// Merges pattern-based candidates with the top-ranked sentences, deduplicates,
/// and clips every entry to 200 chars. Falls back to a deterministic
/// profile-derived list when nothing qualifies.
pub fn extract(text: &str, profile: &DocumentProfile) -> Vec<String> {
    let ranked = rank_sentences(text);

    let mut candidates: Vec<String> = Vec::new();
    candidates.extend(compliance_points(text));
    candidates.extend(risk_points(text));
    candidates.extend(requirement_points(text));
    // Only the top 2 ranked sentences survive the merge; the third ranked
    // sentence is dropped here on purpose, matching historical behavior.
    candidates.extend(ranked.into_iter().take(2));

    let mut unique: Vec<String> = Vec::new();
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }

    let points: Vec<String> = unique
        .into_iter()
        .filter(|p| p.chars().count() > MIN_POINT_CHARS)
        .take(5)
        .map(|p| {
            if p.chars().count() > MAX_POINT_CHARS {
                format!("{}...", clip(&p, MAX_POINT_CHARS - 3))
            } else {
                p
            }
        })
        .collect();

    if points.is_empty() {
        default_key_points(profile)
    } else {
        points
    }
}

/// Score sentences and return the top 3 by importance, ties broken by
/// original order (stable sort).
fn rank_sentences(text: &str) -> Vec<String> {
    let mut scored: Vec<(i32, String)> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(|s| (sentence_importance(s), s.to_string()))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(3).map(|(_, s)| s).collect()
}

fn sentence_importance(sentence: &str) -> i32 {
    let lower = sentence.to_lowercase();
    let mut score = 0;

    // Compliance keywords across all taxonomy categories
    for keyword in taxonomy::all_keywords() {
        if lower.contains(keyword) {
            score += 2;
        }
    }

    for indicator in IMPORTANCE_INDICATORS {
        if lower.contains(indicator) {
            score += 3;
        }
    }

    // Quantitative data
    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }

    // Optimal length band
    let len = sentence.chars().count();
    if len > 50 && len < 200 {
        score += 1;
    }

    score
}

fn compliance_points(text: &str) -> Vec<String> {
    COMPLIANCE_PATTERNS
        .iter()
        .filter_map(|(pattern, label)| {
            pattern
                .find(text)
                .map(|m| format!("{}: {}...", label, clip(m.as_str(), 150)))
        })
        .collect()
}

fn risk_points(text: &str) -> Vec<String> {
    RISK_PATTERNS
        .iter()
        .filter_map(|pattern| {
            pattern
                .find(text)
                .map(|m| format!("Risque identifié: {}...", clip(m.as_str().trim(), 120)))
        })
        .collect()
}

fn requirement_points(text: &str) -> Vec<String> {
    REQUIREMENT_PATTERNS
        .iter()
        .filter_map(|pattern| {
            pattern
                .find(text)
                .map(|m| format!("Exigence: {}...", clip(m.as_str().trim(), 120)))
        })
        .collect()
}

/// Deterministic fallback list, derived purely from the profile.
fn default_key_points(profile: &DocumentProfile) -> Vec<String> {
    vec![
        format!(
            "Analyse {} révélant {} niveau de risque",
            profile.document_type.label(),
            profile.risk_level.phrase()
        ),
        format!(
            "Identification des exigences de conformité dans les domaines: {}",
            profile.key_areas.join(", ")
        ),
        "Évaluation des processus de contrôle et de surveillance existants".to_string(),
        "Recommandations pour l'amélioration de la conformité réglementaire".to_string(),
        "Plan d'action prioritaire pour la mise en conformité".to_string(),
    ]
}

/// First `max_chars` chars of a string, on char boundaries.
fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
