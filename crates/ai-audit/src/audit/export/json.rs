use super::{AuditExport, ExportError};

pub(super) fn render(export: &AuditExport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(export)?)
}
