//! Token Route - OAuth2 password flow

use axum::{extract::State, routing::post, Form, Json, Router};

use super::ApiError;
use crate::models::{TokenRequest, TokenResponse};
use crate::AppState;

/// Exchange admin credentials for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "Authentication"
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth
        .login(&form.username, &form.password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    match token {
        Some(token) => {
            tracing::info!(username = %form.username, "Issued access token");
            Ok(Json(TokenResponse::bearer(token)))
        }
        None => {
            tracing::warn!(username = %form.username, "Rejected login");
            Err(ApiError::Unauthorized(
                "Incorrect username or password".to_string(),
            ))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}
