//! Briefing Routes
//!
//! Assembles the briefing, then records the request in the log.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use briefing::BriefingRequest;

use super::ApiError;
use crate::models::{BriefingQuery, BriefingResponse};
use crate::AppState;

/// Get the daily briefing for a user
#[utoipa::path(
    get,
    path = "/briefing/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        BriefingQuery,
    ),
    responses(
        (status = 200, description = "Briefing assembled", body = BriefingResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid user ID or city"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Briefing"
)]
pub async fn get_briefing(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<BriefingQuery>, QueryRejection>,
) -> Result<Json<BriefingResponse>, ApiError> {
    let Path(user_id) = user_id.map_err(|e| ApiError::Validation(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;

    let request = BriefingRequest::new(user_id, query.city.unwrap_or_default())?;
    let result = state.assembler.assemble(&request).await?;

    state
        .log_service
        .record(request.user_id(), request.city())
        .await?;

    Ok(Json(result.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/briefing/:user_id", get(get_briefing))
}
