use super::catalog::{self, CATEGORIES, RESEARCH_QUESTIONS};
use super::domain::{AuditPayload, CategoryScore};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Unvalidated audit input as it arrives from the CLI, a JSON file, or the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAuditInput {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub contact: Option<String>,
    pub audit_date: Option<String>,
    pub scores: HashMap<String, u32>,
    pub research_answers: HashMap<String, String>,
    pub selected_use_cases: Vec<String>,
}

/// Normalizes raw input against the static catalogs. Never fails: absent
/// values become empty strings or zero scores.
pub fn build_payload(raw: &RawAuditInput) -> AuditPayload {
    let scores = CATEGORIES
        .iter()
        .map(|category| CategoryScore {
            key: category.key.to_string(),
            label: category.label.to_string(),
            score: raw.scores.get(category.key).copied().unwrap_or(0),
        })
        .collect();

    let research_answers: BTreeMap<String, String> = RESEARCH_QUESTIONS
        .iter()
        .map(|question| {
            let answer = raw
                .research_answers
                .get(question.key)
                .map(|value| value.trim().to_string())
                .unwrap_or_default();
            (question.key.to_string(), answer)
        })
        .collect();

    AuditPayload {
        business_name: trimmed(raw.business_name.as_deref()),
        industry: trimmed(raw.industry.as_deref()),
        contact: trimmed(raw.contact.as_deref()),
        audit_date: trimmed(raw.audit_date.as_deref()),
        scores,
        research_answers,
        selected_use_cases: select_use_cases(&raw.selected_use_cases),
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn select_use_cases(requested: &[String]) -> Vec<String> {
    let mut positions: Vec<usize> = Vec::new();

    for label in requested {
        let label = label.trim();
        match catalog::use_case_position(label) {
            Some(position) if !positions.contains(&position) => positions.push(position),
            Some(_) => {}
            None => warn!(use_case = label, "ignoring use case outside the catalog"),
        }
    }

    positions.sort_unstable();
    positions
        .into_iter()
        .map(|position| catalog::USE_CASE_CATALOG[position].to_string())
        .collect()
}
