//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{BriefingLogResponse, BriefingResponse, TokenRequest, TokenResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Briefing endpoints
        super::briefing::get_briefing,
        // Auth endpoints
        super::token::issue_token,
        // Log endpoints
        super::logs::list_logs,
        super::logs::get_log,
        super::logs::delete_log,
    ),
    info(
        title = "Daily Briefing API",
        version = "0.1.0",
        description = "Daily briefings for users, combining their profile, latest post and the current weather.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Briefing", description = "Briefing - Profile, weather and latest post"),
        (name = "Authentication", description = "Authentication - Bearer token issuance"),
        (name = "Logs", description = "Logs - Served briefing requests"),
    ),
    components(
        schemas(
            crate::HealthCheck,
            BriefingResponse,
            BriefingLogResponse,
            TokenRequest,
            TokenResponse,
        )
    ),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme used by the log endpoints
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
