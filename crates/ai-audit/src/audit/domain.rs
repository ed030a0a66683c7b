use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Score recorded for one catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub key: String,
    pub label: String,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Emerging,
    Developing,
    Advanced,
}

impl MaturityLevel {
    pub const DEVELOPING_THRESHOLD: f64 = 3.0;
    pub const ADVANCED_THRESHOLD: f64 = 4.2;

    pub const fn ordered() -> [Self; 3] {
        [Self::Emerging, Self::Developing, Self::Advanced]
    }

    /// Classifies an unrounded average score.
    pub fn classify(average: f64) -> Self {
        if average >= Self::ADVANCED_THRESHOLD {
            Self::Advanced
        } else if average >= Self::DEVELOPING_THRESHOLD {
            Self::Developing
        } else {
            Self::Emerging
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Advanced => "Advanced",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Emerging => "score-emerging",
            Self::Developing => "score-developing",
            Self::Advanced => "score-advanced",
        }
    }

    pub const fn guidance(self) -> [&'static str; 3] {
        match self {
            Self::Emerging => [
                "Define a leadership-endorsed AI roadmap with clear legal and business outcomes.",
                "Prioritize POPIA-aligned data policies before scaling pilots.",
                "Start with low-risk use cases such as internal knowledge search and document triage.",
            ],
            Self::Developing => [
                "Formalize governance committees covering legal, IT, and communications.",
                "Expand team enablement with targeted AI literacy and prompt safety training.",
                "Standardize client-facing messaging on how AI is used responsibly.",
            ],
            Self::Advanced => [
                "Scale AI initiatives with robust model risk monitoring and audit trails.",
                "Integrate AI readiness metrics into ongoing client advisory engagements.",
                "Create a repeatable innovation playbook for cross-industry deployments.",
            ],
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one audit. Recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub total: u64,
    /// Rounded to two decimals; classification used the unrounded value.
    pub average: f64,
    pub level: MaturityLevel,
    pub guidance: Vec<String>,
}

/// Everything the user entered for one audit, normalized against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditPayload {
    pub business_name: String,
    pub industry: String,
    pub contact: String,
    pub audit_date: String,
    pub scores: Vec<CategoryScore>,
    pub research_answers: BTreeMap<String, String>,
    pub selected_use_cases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_respects_threshold_edges() {
        assert_eq!(MaturityLevel::classify(0.0), MaturityLevel::Emerging);
        assert_eq!(MaturityLevel::classify(2.99), MaturityLevel::Emerging);
        assert_eq!(MaturityLevel::classify(3.0), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::classify(4.19), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::classify(4.2), MaturityLevel::Advanced);
        assert_eq!(MaturityLevel::classify(5.0), MaturityLevel::Advanced);
    }

    #[test]
    fn level_serializes_as_label() {
        for level in MaturityLevel::ordered() {
            let json = serde_json::to_string(&level).expect("level serializes");
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
    }
}
