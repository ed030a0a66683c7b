use crate::infra::{parse_answer, parse_date, parse_format, parse_score};
use ai_audit::audit::catalog::{CATEGORIES, RESEARCH_QUESTIONS, USE_CASE_CATALOG};
use ai_audit::audit::export::{self, write_export};
use ai_audit::audit::{
    build_payload, import_scores_from_path, AuditExport, DraftSummary, ExportFormat,
    RawAuditInput, SummaryGenerator,
};
use ai_audit::config::AppConfig;
use ai_audit::error::AppError;
use ai_audit::telemetry;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Audit answers shared by the `evaluate` and `export` commands. Flags take
/// precedence over `--input`, whose scores take precedence over the score sheet.
#[derive(Args, Debug, Default)]
pub(crate) struct AuditInputArgs {
    /// JSON file with the audit input (camelCase field names)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// CSV score sheet with `key,score` columns
    #[arg(long)]
    pub(crate) scores_csv: Option<PathBuf>,
    #[arg(long)]
    pub(crate) business_name: Option<String>,
    #[arg(long)]
    pub(crate) industry: Option<String>,
    #[arg(long)]
    pub(crate) contact: Option<String>,
    /// Audit date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) audit_date: Option<NaiveDate>,
    /// Category score as `key=1..5`; repeat for each category
    #[arg(long = "score", value_parser = parse_score)]
    pub(crate) scores: Vec<(String, u32)>,
    /// Research answer as `questionKey=text`; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Use case label from the catalog; repeat to select several
    #[arg(long = "use-case")]
    pub(crate) use_cases: Vec<String>,
}

impl AuditInputArgs {
    pub(crate) fn into_raw(self, today: NaiveDate) -> Result<RawAuditInput, AppError> {
        let mut raw: RawAuditInput = match &self.input {
            Some(path) => {
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader(reader).map_err(|err| {
                    AppError::Input(format!("{} is not valid audit JSON: {err}", path.display()))
                })?
            }
            None => RawAuditInput::default(),
        };

        if let Some(path) = &self.scores_csv {
            let mut scores = import_scores_from_path(path)?;
            scores.extend(raw.scores.drain());
            raw.scores = scores;
        }

        override_text(&mut raw.business_name, self.business_name);
        override_text(&mut raw.industry, self.industry);
        override_text(&mut raw.contact, self.contact);
        if let Some(date) = self.audit_date {
            raw.audit_date = Some(date.to_string());
        }
        raw.scores.extend(self.scores);
        raw.research_answers.extend(self.answers);
        raw.selected_use_cases.extend(self.use_cases);

        let date_missing = raw
            .audit_date
            .as_deref()
            .map_or(true, |value| value.trim().is_empty());
        if date_missing {
            raw.audit_date = Some(today.to_string());
        }

        Ok(raw)
    }
}

fn override_text(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    pub(crate) input: AuditInputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) input: AuditInputArgs,
    /// Report format (json, csv, text); repeat for several. Defaults to all three.
    #[arg(long = "format", value_parser = parse_format)]
    pub(crate) formats: Vec<ExportFormat>,
    /// Directory for the report files (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

fn prepare_export(input: AuditInputArgs) -> Result<AuditExport, AppError> {
    let raw = input.into_raw(Local::now().date_naive())?;
    Ok(AuditExport::new(build_payload(&raw)))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let export = prepare_export(args.input)?;
    let report = export::render(&export, ExportFormat::Text)?;
    let summary = DraftSummary.summarize(&export.payload, &export.result)?;

    print!("{report}");
    println!("\nSummary draft");
    println!("-------------");
    println!("{summary}");

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs {
        input,
        formats,
        out_dir,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let export = prepare_export(input)?;
    let out_dir = out_dir.unwrap_or(config.export.output_dir);
    let formats = if formats.is_empty() {
        ExportFormat::ordered().to_vec()
    } else {
        formats
    };

    println!(
        "{} audit: {} (avg {:.2}/5)",
        display_name(&export.payload.business_name),
        export.result.level,
        export.result.average
    );
    for format in formats {
        let path = write_export(&out_dir, &export, format)?;
        println!("- {format}: {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_catalog() {
    println!("Audit categories (score 1-5)");
    for category in &CATEGORIES {
        println!("- {} | {} | {}", category.key, category.label, category.prompt);
    }

    println!("\nResearch questions");
    for question in &RESEARCH_QUESTIONS {
        println!("- {} | {} | {}", question.key, question.label, question.prompt);
    }

    println!("\nUse case catalog");
    for use_case in USE_CASE_CATALOG {
        println!("- {use_case}");
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "Unnamed business"
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date")
    }

    #[test]
    fn flags_build_raw_input_with_default_date() {
        let args = AuditInputArgs {
            business_name: Some("Acme".to_string()),
            scores: vec![("strategy".to_string(), 4)],
            answers: vec![("painPoints".to_string(), "Invoices".to_string())],
            use_cases: vec!["Internal knowledge search".to_string()],
            ..AuditInputArgs::default()
        };

        let raw = args.into_raw(today()).expect("raw input builds");
        assert_eq!(raw.business_name.as_deref(), Some("Acme"));
        assert_eq!(raw.audit_date.as_deref(), Some("2025-05-01"));
        assert_eq!(raw.scores.get("strategy"), Some(&4));
        assert_eq!(raw.research_answers.get("painPoints").map(String::as_str), Some("Invoices"));
        assert_eq!(raw.selected_use_cases.len(), 1);
    }

    #[test]
    fn score_sheet_only_fills_scores_missing_from_input_file() {
        let dir = std::env::temp_dir().join(format!("ai-audit-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let input_path = dir.join("input.json");
        let sheet_path = dir.join("scores.csv");
        fs::write(
            &input_path,
            r#"{ "businessName": "From File", "auditDate": "2024-12-01", "scores": { "data": 1, "skills": 2 } }"#,
        )
        .expect("write input");
        fs::write(&sheet_path, "key,score\ndata,3\ntechnology,3\ncomms,5\n").expect("write sheet");

        let args = AuditInputArgs {
            input: Some(input_path),
            scores_csv: Some(sheet_path),
            business_name: Some("From Flag".to_string()),
            scores: vec![("comms".to_string(), 4)],
            ..AuditInputArgs::default()
        };

        let raw = args.into_raw(today()).expect("raw input builds");
        assert_eq!(raw.business_name.as_deref(), Some("From Flag"));
        assert_eq!(raw.audit_date.as_deref(), Some("2024-12-01"));
        assert_eq!(raw.scores.get("data"), Some(&1));
        assert_eq!(raw.scores.get("skills"), Some(&2));
        assert_eq!(raw.scores.get("technology"), Some(&3));
        assert_eq!(raw.scores.get("comms"), Some(&4));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_input_file_is_an_input_error() {
        let dir = std::env::temp_dir().join(format!("ai-audit-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let input_path = dir.join("input.json");
        fs::write(&input_path, "{ not json").expect("write input");

        let args = AuditInputArgs {
            input: Some(input_path),
            ..AuditInputArgs::default()
        };

        let err = args.into_raw(today()).expect_err("invalid json fails");
        assert!(matches!(err, AppError::Input(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
