//! Briefing Log Application Service (Use Case)
//!
//! Records served briefings and exposes the log for inspection.

use std::sync::Arc;

use briefing::{BriefingLogEntry, BriefingLogRepository, DomainError};

/// Entity name used in not-found errors
pub const LOG_ENTITY: &str = "log";

/// Application service for briefing log operations
pub struct BriefingLogService {
    repo: Arc<dyn BriefingLogRepository>,
}

impl BriefingLogService {
    pub fn new(repo: Arc<dyn BriefingLogRepository>) -> Self {
        Self { repo }
    }

    /// Record a served briefing
    pub async fn record(&self, user_id: i64, city: &str) -> Result<BriefingLogEntry, DomainError> {
        let entry = self.repo.record(user_id, city).await?;

        tracing::info!(
            log_id = entry.id,
            user_id = entry.user_id,
            city = %entry.city,
            "Recorded briefing"
        );

        Ok(entry)
    }

    /// Get all entries, oldest first
    pub async fn list_all(&self) -> Result<Vec<BriefingLogEntry>, DomainError> {
        self.repo.find_all().await
    }

    /// Get an entry by ID
    pub async fn get_by_id(&self, id: i64) -> Result<BriefingLogEntry, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(LOG_ENTITY, id))
    }

    /// Delete an entry
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(LOG_ENTITY, id));
        }

        tracing::info!(log_id = id, "Deleted briefing log");
        Ok(())
    }
}
