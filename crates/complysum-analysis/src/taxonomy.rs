//! Compliance keyword taxonomy — fixed category → keyword mapping.
//!
//! Process-wide constant, never mutated after initialization, so concurrent
//! analyses can read it without locking. The vocabulary is French, matching
//! the documents the tool is built for.

/// One compliance topic bucket.
pub struct Category {
    /// Stable identifier.
    pub name: &'static str,
    /// Human-readable French label used in summaries and topic lists.
    pub label: &'static str,
    /// Lexical keywords matched as lowercase substrings.
    pub keywords: &'static [&'static str],
}

/// The 8 taxonomy categories, in fixed declaration order.
///
/// Order matters: `main_topics` collects labels by iterating this slice.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "risk",
        label: "la gestion des risques",
        keywords: &[
            "risque",
            "danger",
            "menace",
            "vulnérabilité",
            "exposition",
            "incident",
        ],
    },
    Category {
        name: "compliance",
        label: "la conformité réglementaire",
        keywords: &[
            "conformité",
            "réglementation",
            "norme",
            "standard",
            "exigence",
            "obligation",
        ],
    },
    Category {
        name: "audit",
        label: "les contrôles et audits",
        keywords: &[
            "audit",
            "contrôle",
            "vérification",
            "inspection",
            "évaluation",
            "surveillance",
        ],
    },
    Category {
        name: "action",
        label: "les plans d'action",
        keywords: &[
            "action",
            "mesure",
            "correction",
            "amélioration",
            "mise en œuvre",
            "plan",
        ],
    },
    Category {
        name: "legal",
        label: "les aspects juridiques",
        keywords: &[
            "légal",
            "juridique",
            "loi",
            "décret",
            "arrêté",
            "directive",
            "règlement",
        ],
    },
    Category {
        name: "security",
        label: "la sécurité",
        keywords: &[
            "sécurité",
            "protection",
            "confidentialité",
            "intégrité",
            "disponibilité",
        ],
    },
    Category {
        name: "quality",
        label: "la qualité",
        keywords: &[
            "qualité",
            "performance",
            "efficacité",
            "excellence",
            "amélioration continue",
        ],
    },
    Category {
        name: "governance",
        label: "la gouvernance",
        keywords: &[
            "gouvernance",
            "gestion",
            "pilotage",
            "supervision",
            "coordination",
        ],
    },
];

/// Iterate every keyword across all categories, in declaration order.
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|c| c.keywords.iter().copied())
}

/// Total number of taxonomy keywords (used for density scoring).
pub fn keyword_count() -> usize {
    CATEGORIES.iter().map(|c| c.keywords.len()).sum()
}
