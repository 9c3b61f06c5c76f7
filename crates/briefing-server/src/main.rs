use axum::{middleware, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use briefing::{
    BriefingAssembler, ConfigReader, JsonPlaceholderClient, OpenWeatherClient,
    WEATHER_API_KEY_ENV,
};

mod adapters;
mod application;
mod auth;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::PgBriefingLogRepository;
use application::BriefingLogService;
use auth::{AdminAccount, Authenticator, TokenSigner, DEFAULT_TOKEN_TTL_MINUTES};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<BriefingAssembler>,
    pub log_service: Arc<BriefingLogService>,
    pub auth: Arc<Authenticator>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Daily Briefing API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router: public briefing and token routes, bearer-protected log routes
pub fn app(state: AppState) -> Router {
    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(routes::logs::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::briefing::router())
        .merge(routes::token::router())
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn startup_error(message: impl std::fmt::Display) -> shuttle_runtime::Error {
    shuttle_runtime::Error::Custom(anyhow::anyhow!("{message}"))
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📰 Daily Briefing API initializing...");

    // Token signing
    let secret = secrets
        .get("TOKEN_SECRET")
        .ok_or_else(|| startup_error("TOKEN_SECRET secret is required"))?;
    let ttl_minutes = match secrets.get("TOKEN_TTL_MINUTES") {
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            startup_error(format!("TOKEN_TTL_MINUTES must be a whole number, got '{raw}'"))
        })?,
        None => DEFAULT_TOKEN_TTL_MINUTES,
    };
    let signer = TokenSigner::new(&secret, ttl_minutes).map_err(startup_error)?;

    let admin = match (secrets.get("ADMIN_USERNAME"), secrets.get("ADMIN_PASSWORD_HASH")) {
        (Some(username), Some(hash)) => {
            let account = AdminAccount::new(username, hash).map_err(startup_error)?;
            tracing::info!("🔐 Admin account configured");
            Some(account)
        }
        _ => {
            tracing::warn!("⚠️  No ADMIN_USERNAME/ADMIN_PASSWORD_HASH set - token issuance disabled");
            None
        }
    };

    // Upstream clients
    let config_path = secrets
        .get("BRIEFING_CONFIG")
        .unwrap_or_else(|| briefing::config::DEFAULT_CONFIG_FILE.to_string());
    let api_key = secrets
        .get(WEATHER_API_KEY_ENV)
        .or_else(|| std::env::var(WEATHER_API_KEY_ENV).ok());
    let config = ConfigReader::load_with_key(config_path, api_key).map_err(startup_error)?;

    let directory = JsonPlaceholderClient::from_config(&config).map_err(startup_error)?;
    let weather = OpenWeatherClient::from_config(&config).map_err(startup_error)?;
    tracing::info!("🌤️  Upstream clients initialized");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| startup_error(format!("Failed to run database migrations: {e}")))?;

    tracing::info!("✅ Database migrations completed");

    // Create application state
    let state = AppState {
        assembler: Arc::new(BriefingAssembler::new(Arc::new(directory), Arc::new(weather))),
        log_service: Arc::new(BriefingLogService::new(Arc::new(
            PgBriefingLogRepository::new(pool),
        ))),
        auth: Arc::new(Authenticator::new(signer, admin)),
    };

    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Daily Briefing API ready");

    Ok(router.into())
}
