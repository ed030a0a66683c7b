pub mod catalog;
pub mod domain;
pub mod export;
mod import;
mod payload;
mod scorer;
pub mod summary;

pub use domain::{AuditPayload, AuditResult, CategoryScore, MaturityLevel};
pub use export::{AuditExport, ExportError, ExportFormat};
pub use import::{import_scores, import_scores_from_path, ScoreSheetError};
pub use payload::{build_payload, RawAuditInput};
pub use scorer::evaluate;
pub use summary::{DraftSummary, SummaryError, SummaryGenerator};
