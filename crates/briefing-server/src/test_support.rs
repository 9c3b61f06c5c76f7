//! In-memory port implementations for handler and service tests

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use briefing::{
    BriefingAssembler, BriefingLogEntry, BriefingLogRepository, DomainError, Post, UserDirectory,
    UserProfile, WeatherProvider, WeatherSnapshot,
};

use crate::application::BriefingLogService;
use crate::auth::{AdminAccount, Authenticator, TokenSigner, DEFAULT_TOKEN_TTL_MINUTES};
use crate::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const UNKNOWN_CITY: &str = "Atlantis";

pub fn hash_password(password: &str) -> String {
    let salt = SaltString::encode_b64(b"briefing-test-salt").unwrap();
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

#[derive(Default)]
pub struct InMemoryLogRepository {
    entries: Mutex<Vec<BriefingLogEntry>>,
}

#[async_trait]
impl BriefingLogRepository for InMemoryLogRepository {
    async fn record(&self, user_id: i64, city: &str) -> Result<BriefingLogEntry, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let id = entries.last().map_or(1, |last| last.id + 1);
        let entry = BriefingLogEntry {
            id,
            user_id,
            city: city.to_string(),
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<BriefingLogEntry>, DomainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BriefingLogEntry>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        Ok(entries.len() != before)
    }
}

/// Every operation fails as if the database were down
pub struct FailingLogRepository;

#[async_trait]
impl BriefingLogRepository for FailingLogRepository {
    async fn record(&self, _user_id: i64, _city: &str) -> Result<BriefingLogEntry, DomainError> {
        Err(DomainError::Repository("connection reset".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<BriefingLogEntry>, DomainError> {
        Err(DomainError::Repository("connection reset".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<BriefingLogEntry>, DomainError> {
        Err(DomainError::Repository("connection reset".to_string()))
    }

    async fn delete(&self, _id: i64) -> Result<bool, DomainError> {
        Err(DomainError::Repository("connection reset".to_string()))
    }
}

/// Knows user 1 only
pub struct StubDirectory;

#[async_trait]
impl UserDirectory for StubDirectory {
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError> {
        Ok((user_id == 1).then(|| UserProfile::new(1, "Leanne Graham")))
    }

    async fn get_recent_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        if user_id != 1 {
            return Ok(Vec::new());
        }
        Ok(vec![
            Post::new(1, 1, "sunt aut facere"),
            Post::new(2, 1, "qui est esse"),
        ])
    }
}

/// Reports mild weather everywhere except [`UNKNOWN_CITY`]
pub struct StubWeather;

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn get_weather(&self, city: &str) -> Result<Option<WeatherSnapshot>, DomainError> {
        if city == UNKNOWN_CITY {
            return Ok(None);
        }
        Ok(Some(WeatherSnapshot {
            location: city.to_string(),
            temperature: 14.0,
            feels_like: 13.0,
            description: "light rain".to_string(),
            icon_code: "10d".to_string(),
        }))
    }
}

pub fn test_state(repo: Arc<dyn BriefingLogRepository>) -> AppState {
    let signer = TokenSigner::new("test-secret", DEFAULT_TOKEN_TTL_MINUTES).unwrap();
    let admin = AdminAccount::new(ADMIN_USERNAME, hash_password(ADMIN_PASSWORD)).unwrap();

    AppState {
        assembler: Arc::new(BriefingAssembler::new(
            Arc::new(StubDirectory),
            Arc::new(StubWeather),
        )),
        log_service: Arc::new(BriefingLogService::new(repo)),
        auth: Arc::new(Authenticator::new(signer, Some(admin))),
    }
}
