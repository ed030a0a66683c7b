//! Report exports for a completed audit.
//!
//! - `json` - pretty-printed payload with the embedded result
//! - `csv` - metadata, category score, and research answer sections
//! - `text` - fixed-layout report for sharing with the client

mod csv;
mod json;
mod text;

use super::domain::{AuditPayload, AuditResult};
use super::scorer::evaluate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const FILE_PREFIX: &str = "ai-audit";
const FALLBACK_SLUG: &str = "report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub const fn ordered() -> [Self; 3] {
        [Self::Json, Self::Csv, Self::Text]
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ExportError::UnknownFormat(value.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
            Self::Text => f.write_str("text"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown export format '{0}' (expected json, csv, or text)")]
    UnknownFormat(String),
    #[error("failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("CSV export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("failed to format text report")]
    Text(#[from] fmt::Error),
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Exported document: the payload fields plus the computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditExport {
    #[serde(flatten)]
    pub payload: AuditPayload,
    pub result: AuditResult,
}

impl AuditExport {
    /// Scores the payload and pairs it with the fresh result.
    pub fn new(payload: AuditPayload) -> Self {
        let result = evaluate(&payload.scores);
        Self { payload, result }
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        file_name(&self.payload.business_name, format)
    }
}

pub fn render(export: &AuditExport, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => json::render(export),
        ExportFormat::Csv => csv::render(export),
        ExportFormat::Text => Ok(text::render(export)?),
    }
}

/// Lowercases and collapses every run of non-alphanumeric characters into a
/// single hyphen, without leading or trailing hyphens.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

pub fn file_name(business_name: &str, format: ExportFormat) -> String {
    let slug = slugify(business_name);
    let slug = if slug.is_empty() {
        FALLBACK_SLUG
    } else {
        slug.as_str()
    };
    format!("{FILE_PREFIX}-{slug}.{}", format.extension())
}

/// Renders the export and writes it into `dir`, returning the written path.
pub fn write_export(
    dir: &Path,
    export: &AuditExport,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let content = render(export, format)?;
    let path = dir.join(export.file_name(format));

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, content).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), %format, "audit export written");
    Ok(path)
}
