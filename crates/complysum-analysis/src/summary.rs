//! Local summary composer — deterministic fallback for the remote summarizer.
//!
//! Renders fixed French sentence templates from the classifier profile, so
//! presentation stays unit-testable without re-deriving the profile.

use crate::profile::DocumentProfile;

/// Compose the full executive summary from the profile alone. Used whenever
/// the remote summarizer is unavailable.
pub fn compose(profile: &DocumentProfile) -> String {
    format!(
        "Ce document présente une analyse {} portant sur {}. \
         L'analyse révèle {} niveau de risque avec {} points de conformité identifiés. \
         Les principales préoccupations concernent {}. \
         {} actions sont recommandées pour assurer la conformité réglementaire \
         et minimiser les risques opérationnels.",
        profile.document_type.label(),
        profile.main_topics.join(", "),
        profile.risk_level.phrase(),
        profile.compliance_issues.len(),
        profile.key_areas.join(", "),
        profile.urgency_level.quantifier(),
    )
}

/// Append one templated contextual sentence to a remote summary.
pub fn enrich(remote_summary: &str, profile: &DocumentProfile) -> String {
    format!(
        "{} Dans le contexte de {} analyse, les enjeux de {} nécessitent une attention particulière.",
        remote_summary,
        profile.document_type.label(),
        profile.main_topics.join(" et "),
    )
}
