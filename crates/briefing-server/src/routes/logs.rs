//! Briefing Log Routes
//!
//! HTTP handlers that delegate to BriefingLogService. Mounted behind
//! the bearer token middleware.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use super::ApiError;
use crate::auth::Claims;
use crate::models::BriefingLogResponse;
use crate::AppState;

fn log_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::Validation(e.body_text()))
}

/// List all briefing log entries
#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "All log entries, oldest first", body = Vec<BriefingLogResponse>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = [])),
    tag = "Logs"
)]
pub async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BriefingLogResponse>>, ApiError> {
    let entries = state.log_service.list_all().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Get a briefing log entry by ID
#[utoipa::path(
    get,
    path = "/logs/{log_id}",
    params(("log_id" = i64, Path, description = "Log entry ID")),
    responses(
        (status = 200, description = "Log entry found", body = BriefingLogResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Log entry not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = [])),
    tag = "Logs"
)]
pub async fn get_log(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BriefingLogResponse>, ApiError> {
    let entry = state.log_service.get_by_id(log_id(path)?).await?;
    Ok(Json(entry.into()))
}

/// Delete a briefing log entry
#[utoipa::path(
    delete,
    path = "/logs/{log_id}",
    params(("log_id" = i64, Path, description = "Log entry ID")),
    responses(
        (status = 204, description = "Log entry deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Log entry not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = [])),
    tag = "Logs"
)]
pub async fn delete_log(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = log_id(path)?;
    tracing::info!(username = %claims.username, log_id = id, "Deleting briefing log");
    state.log_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/:log_id", get(get_log).delete(delete_log))
}
