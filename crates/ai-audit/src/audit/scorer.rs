use super::domain::{AuditResult, CategoryScore, MaturityLevel};
use tracing::debug;

/// Scores an audit. Scores are not validated: an unanswered category arrives
/// as 0 and still counts toward the average.
pub fn evaluate(scores: &[CategoryScore]) -> AuditResult {
    let total: u64 = scores.iter().map(|item| u64::from(item.score)).sum();
    let average = if scores.is_empty() {
        0.0
    } else {
        total as f64 / scores.len() as f64
    };

    let level = MaturityLevel::classify(average);
    debug!(total, average, level = level.label(), "audit evaluated");

    AuditResult {
        total,
        average: round_to_hundredths(average),
        level,
        guidance: level.guidance().iter().map(|line| line.to_string()).collect(),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
