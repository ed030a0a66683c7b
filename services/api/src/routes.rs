use crate::infra::AppState;
use ai_audit::audit::catalog::{
    AuditCategory, ResearchQuestion, CATEGORIES, RESEARCH_QUESTIONS, USE_CASE_CATALOG,
};
use ai_audit::audit::export;
use ai_audit::audit::{
    build_payload, import_scores, AuditExport, AuditPayload, AuditResult, ExportFormat,
    RawAuditInput,
};
use ai_audit::error::AppError;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::atomic::Ordering;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuditRequest {
    #[serde(flatten)]
    pub(crate) input: RawAuditInput,
    /// Optional `key,score` sheet; explicit `scores` entries win.
    #[serde(default)]
    pub(crate) scores_csv: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluateResponse {
    pub(crate) payload: AuditPayload,
    pub(crate) result: AuditResult,
    pub(crate) level_class: &'static str,
    pub(crate) summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogResponse {
    pub(crate) categories: &'static [AuditCategory],
    pub(crate) research_questions: &'static [ResearchQuestion],
    pub(crate) use_cases: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportQuery {
    #[serde(default)]
    pub(crate) format: Option<String>,
}

pub(crate) fn audit_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/audit/catalog", get(catalog_endpoint))
        .route("/api/v1/audit/evaluate", post(evaluate_endpoint))
        .route("/api/v1/audit/export", post(export_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        categories: &CATEGORIES,
        research_questions: &RESEARCH_QUESTIONS,
        use_cases: &USE_CASE_CATALOG,
    })
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let AuditExport { payload, result } = prepare_export(request)?;
    let summary = state.summary.summarize(&payload, &result)?;

    Ok(Json(EvaluateResponse {
        level_class: result.level.css_class(),
        payload,
        result,
        summary,
    }))
}

pub(crate) async fn export_endpoint(
    Query(query): Query<ExportQuery>,
    Json(request): Json<AuditRequest>,
) -> Result<impl IntoResponse, AppError> {
    let format: ExportFormat = query.format.as_deref().unwrap_or("json").parse()?;
    let audit = prepare_export(request)?;
    let body = export::render(&audit, format)?;

    let content_type = mime_guess::from_ext(format.extension())
        .first_or_octet_stream()
        .to_string();
    let disposition = format!("attachment; filename=\"{}\"", audit.file_name(format));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

fn prepare_export(request: AuditRequest) -> Result<AuditExport, AppError> {
    let AuditRequest {
        mut input,
        scores_csv,
    } = request;

    if let Some(sheet) = scores_csv {
        let mut scores = import_scores(Cursor::new(sheet.into_bytes()))?;
        scores.extend(input.scores.drain());
        input.scores = scores;
    }

    let date_missing = input
        .audit_date
        .as_deref()
        .map_or(true, |value| value.trim().is_empty());
    if date_missing {
        input.audit_date = Some(Local::now().date_naive().to_string());
    }

    Ok(AuditExport::new(build_payload(&input)))
}
