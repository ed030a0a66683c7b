use ai_audit::audit::catalog;
use ai_audit::audit::{ExportFormat, SummaryGenerator};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) summary: Arc<dyn SummaryGenerator>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>().map_err(|err| err.to_string())
}

/// Parses `key=score` where the key is a catalog category and the score is 1-5.
pub(crate) fn parse_score(raw: &str) -> Result<(String, u32), String> {
    let (key, value) = split_pair(raw)?;
    if catalog::category(key).is_none() {
        let known: Vec<_> = catalog::CATEGORIES.iter().map(|c| c.key).collect();
        return Err(format!(
            "unknown category '{key}' (expected one of: {})",
            known.join(", ")
        ));
    }

    let score: u32 = value
        .parse()
        .map_err(|_| format!("score for '{key}' must be a whole number, got '{value}'"))?;
    if !(1..=5).contains(&score) {
        return Err(format!("score for '{key}' must be between 1 and 5, got {score}"));
    }

    Ok((key.to_string(), score))
}

/// Parses `key=answer` where the key is a research question.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (key, value) = split_pair(raw)?;
    if catalog::research_question(key).is_none() {
        let known: Vec<_> = catalog::RESEARCH_QUESTIONS.iter().map(|q| q.key).collect();
        return Err(format!(
            "unknown research question '{key}' (expected one of: {})",
            known.join(", ")
        ));
    }

    Ok((key.to_string(), value.to_string()))
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}
