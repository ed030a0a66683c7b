use super::domain::{AuditPayload, AuditResult};

/// Produces the narrative summary shown next to the score breakdown.
///
/// The bundled [`DraftSummary`] is template based; a remote model client can
/// implement this trait without touching scoring or exports.
pub trait SummaryGenerator: Send + Sync {
    fn summarize(&self, payload: &AuditPayload, result: &AuditResult)
        -> Result<String, SummaryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summary provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DraftSummary;

impl SummaryGenerator for DraftSummary {
    fn summarize(
        &self,
        payload: &AuditPayload,
        result: &AuditResult,
    ) -> Result<String, SummaryError> {
        let name = &payload.business_name;
        let focus = result
            .guidance
            .first()
            .map(|item| item.to_lowercase())
            .unwrap_or_default();

        Ok(format!(
            "Summary draft for {name}: {name} is currently at a {} AI readiness stage ({}/5). Focus first on {focus}",
            result.level.label().to_lowercase(),
            result.average,
        ))
    }
}
