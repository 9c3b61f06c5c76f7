//! Upstream Adapters
//!
//! reqwest implementations of the upstream service ports.

mod jsonplaceholder;
mod openweather;

pub use jsonplaceholder::JsonPlaceholderClient;
pub use openweather::OpenWeatherClient;

use reqwest::{Client, Response};
use std::time::Duration;

use crate::domain::DomainError;

const USER_AGENT: &str = concat!("briefing/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a hard per-request ceiling
fn http_client(timeout: Duration) -> Result<Client, DomainError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))
}

/// Fail with the status and body of a non-2xx response
async fn ensure_success(response: Response) -> Result<Response, DomainError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(DomainError::ExternalService(format!(
        "API error ({status}): {body}"
    )))
}

fn request_failed(err: reqwest::Error) -> DomainError {
    DomainError::ExternalService(format!("Request failed: {err}"))
}

fn trim_base_url(base_url: &str) -> Result<String, DomainError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Base URL cannot be empty.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
