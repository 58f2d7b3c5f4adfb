use crate::infra::{normalize, AppState, NormalizeMode, NormalizeOutput};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use brandpilot::audit::import::ProfileImporter;
use brandpilot::error::AppError;
use brandpilot::{
    calculate_branding_completion, parse_ai_response, AuditReport, BrandingCompletion,
    BrandingRawData, ProfileSnapshot,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Cursor;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
pub(crate) struct AuditScoreResponse {
    #[serde(flatten)]
    pub(crate) report: AuditReport,
    pub(crate) evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuditImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportedAudit {
    pub(crate) handle: String,
    pub(crate) captured_at: Option<NaiveDateTime>,
    pub(crate) report: AuditReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuditImportResponse {
    pub(crate) profiles: Vec<ImportedAudit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NormalizeRequest {
    pub(crate) mode: NormalizeMode,
    #[serde(default)]
    pub(crate) value: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AiParseRequest {
    pub(crate) raw: String,
}

/// Service router; `max_body_bytes` caps every JSON payload.
pub(crate) fn app_routes(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/audit/score", post(audit_score_endpoint))
        .route("/api/v1/audit/import", post(audit_import_endpoint))
        .route("/api/v1/branding/completion", post(branding_completion_endpoint))
        .route("/api/v1/text/normalize", post(normalize_endpoint))
        .route("/api/v1/ai/parse", post(ai_parse_endpoint))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

pub(crate) async fn audit_score_endpoint(
    Json(profile): Json<ProfileSnapshot>,
) -> Json<AuditScoreResponse> {
    let report = AuditReport::from_profile(&profile);
    debug!(score = report.score, band = ?report.label.band, "profile audited");
    Json(AuditScoreResponse {
        report,
        evaluated_at: Utc::now(),
    })
}

pub(crate) async fn audit_import_endpoint(
    Json(payload): Json<AuditImportRequest>,
) -> Result<Json<AuditImportResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let imported = ProfileImporter::from_reader(reader).map_err(|err| {
        warn!(error = %err, "profile import rejected");
        err
    })?;

    let profiles = imported
        .into_iter()
        .map(|profile| {
            let report = profile.report();
            ImportedAudit {
                handle: profile.handle,
                captured_at: profile.captured_at,
                report,
            }
        })
        .collect();

    Ok(Json(AuditImportResponse { profiles }))
}

pub(crate) async fn branding_completion_endpoint(
    Json(raw): Json<BrandingRawData>,
) -> Json<BrandingCompletion> {
    Json(calculate_branding_completion(&raw))
}

pub(crate) async fn normalize_endpoint(
    Json(payload): Json<NormalizeRequest>,
) -> Json<NormalizeOutput> {
    Json(normalize(payload.mode, &payload.value))
}

pub(crate) async fn ai_parse_endpoint(
    Json(payload): Json<AiParseRequest>,
) -> Result<Json<Value>, AppError> {
    let value: Value = parse_ai_response(&payload.raw).map_err(|err| {
        warn!(
            input_len = err.input_len(),
            last_error = err.last_error(),
            "AI response could not be recovered"
        );
        err
    })?;
    Ok(Json(json!({ "value": value })))
}
