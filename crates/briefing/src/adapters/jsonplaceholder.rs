//! JSONPlaceholder user directory client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use super::{ensure_success, http_client, request_failed, trim_base_url};
use crate::config::{ConfigError, ConfigReader, DIRECTORY_SERVICE};
use crate::domain::{DomainError, Post, UserProfile};
use crate::ports::UserDirectory;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// User directory backed by the JSONPlaceholder REST API
#[derive(Debug, Clone)]
pub struct JsonPlaceholderClient {
    client: Client,
    base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client: http_client(REQUEST_TIMEOUT)?,
            base_url: trim_base_url(base_url)?,
        })
    }

    /// Uses `[jsonplaceholder].base_url` when configured
    pub fn from_config(config: &ConfigReader) -> Result<Self, ConfigError> {
        Self::new(config.base_url(DIRECTORY_SERVICE).unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| ConfigError::HttpClient(e.to_string()))
    }

    /// Overrides the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DomainError> {
        self.client = http_client(timeout)?;
        Ok(self)
    }
}

// ============================================
// Response Types
// ============================================

/// Unknown ids come back as `{}` with 200 OK, hence the optional id
#[derive(Deserialize)]
struct UserDto {
    id: Option<i64>,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDto {
    id: i64,
    user_id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            body: dto.body,
        }
    }
}

#[async_trait]
impl UserDirectory for JsonPlaceholderClient {
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        tracing::info!(user_id, %url, "Fetching user");

        let response = self.client.get(&url).send().await.map_err(request_failed)?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(user_id, "User not found");
            return Ok(None);
        }

        let user: UserDto = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Malformed user payload: {e}")))?;

        match user.id {
            Some(id) => {
                tracing::info!(user_id, "Fetched user");
                Ok(Some(UserProfile::new(id, user.name)))
            }
            None => {
                tracing::warn!(user_id, "User not found (API returned empty object)");
                Ok(None)
            }
        }
    }

    async fn get_recent_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        let url = format!("{}/posts", self.base_url);
        tracing::info!(user_id, %url, "Fetching posts");

        let response = self
            .client
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await
            .map_err(request_failed)?;

        let posts: Vec<PostDto> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Malformed posts payload: {e}")))?;

        tracing::info!(user_id, count = posts.len(), "Fetched posts");
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
