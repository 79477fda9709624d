//! Action-suggestion engine — four category generators merged by priority.

use serde::{Deserialize, Serialize};

use crate::profile::{DocumentProfile, RiskLevel};

/// Suggested action as it appears in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSuggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Ordering-only impact tier, dropped before the report is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl Impact {
    fn rank(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

struct Candidate {
    title: &'static str,
    description: String,
    priority: Priority,
    impact: Impact,
}

/// Generate 0..=5 prioritized action suggestions for a document.
pub fn generate(text: &str, profile: &DocumentProfile) -> Vec<ActionSuggestion> {
    let lower = text.to_lowercase();

    let mut candidates: Vec<Candidate> = Vec::new();
    urgent_actions(&lower, profile, &mut candidates);
    compliance_actions(&lower, &mut candidates);
    improvement_actions(&lower, profile, &mut candidates);
    monitoring_actions(&lower, &mut candidates);

    // Stable sort: priority rank desc, then impact rank desc
    candidates.sort_by(|a, b| {
        (b.priority.rank(), b.impact.rank()).cmp(&(a.priority.rank(), a.impact.rank()))
    });

    candidates
        .into_iter()
        .take(5)
        .map(|c| ActionSuggestion {
            title: c.title.to_string(),
            description: c.description,
            priority: c.priority,
        })
        .collect()
}

fn urgent_actions(lower: &str, profile: &DocumentProfile, out: &mut Vec<Candidate>) {
    if profile.risk_level == RiskLevel::High
        || lower.contains("urgent")
        || lower.contains("critique")
    {
        out.push(Candidate {
            title: "Audit de conformité d'urgence",
            description: "Réaliser immédiatement un audit complet pour identifier et traiter \
                          les non-conformités critiques"
                .to_string(),
            priority: Priority::High,
            impact: Impact::Critical,
        });
    }

    if !profile.compliance_issues.is_empty() {
        out.push(Candidate {
            title: "Plan de remédiation immédiate",
            description: format!(
                "Traiter en priorité les {} problèmes de conformité identifiés",
                profile.compliance_issues.len()
            ),
            priority: Priority::High,
            impact: Impact::High,
        });
    }

    if lower.contains("incident") || lower.contains("accident") {
        out.push(Candidate {
            title: "Investigation et analyse des causes",
            description: "Mener une investigation approfondie pour identifier les causes \
                          racines et prévenir la récurrence"
                .to_string(),
            priority: Priority::High,
            impact: Impact::High,
        });
    }
}

fn compliance_actions(lower: &str, out: &mut Vec<Candidate>) {
    if lower.contains("formation") || lower.contains("sensibilisation") {
        out.push(Candidate {
            title: "Programme de formation renforcé",
            description: "Développer et déployer un programme de formation ciblé sur les \
                          exigences de conformité identifiées"
                .to_string(),
            priority: Priority::Medium,
            impact: Impact::Medium,
        });
    }

    if lower.contains("documentation") || lower.contains("procédure") {
        out.push(Candidate {
            title: "Révision documentaire complète",
            description: "Mettre à jour l'ensemble de la documentation pour assurer la \
                          conformité aux nouvelles exigences"
                .to_string(),
            priority: Priority::Medium,
            impact: Impact::Medium,
        });
    }

    if lower.contains("certification") || lower.contains("accréditation") {
        out.push(Candidate {
            title: "Préparation à la certification",
            description: "Mettre en place les processus nécessaires pour obtenir ou \
                          maintenir la certification requise"
                .to_string(),
            priority: Priority::Medium,
            impact: Impact::High,
        });
    }
}

fn improvement_actions(lower: &str, profile: &DocumentProfile, out: &mut Vec<Candidate>) {
    if profile.key_areas.contains(&"la qualité") {
        out.push(Candidate {
            title: "Amélioration continue des processus",
            description: "Implémenter une démarche d'amélioration continue basée sur les \
                          meilleures pratiques"
                .to_string(),
            priority: Priority::Medium,
            impact: Impact::Medium,
        });
    }

    if lower.contains("technologie") || lower.contains("système") {
        out.push(Candidate {
            title: "Modernisation des outils de gestion",
            description: "Déployer des solutions technologiques pour automatiser le suivi \
                          de la conformité"
                .to_string(),
            priority: Priority::Low,
            impact: Impact::Medium,
        });
    }
}

fn monitoring_actions(lower: &str, out: &mut Vec<Candidate>) {
    // Always suggested: every document benefits from ongoing monitoring
    out.push(Candidate {
        title: "Système de surveillance continue",
        description: "Mettre en place un système de monitoring en temps réel des \
                      indicateurs de conformité"
            .to_string(),
        priority: Priority::Low,
        impact: Impact::Medium,
    });

    if lower.contains("indicateur") || lower.contains("kpi") {
        out.push(Candidate {
            title: "Tableau de bord de conformité",
            description: "Développer un tableau de bord avec des KPI pour le suivi de la \
                          performance de conformité"
                .to_string(),
            priority: Priority::Low,
            impact: Impact::Low,
        });
    }
}
