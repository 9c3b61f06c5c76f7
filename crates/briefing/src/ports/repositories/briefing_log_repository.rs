//! Briefing Log Repository Port
//!
//! Abstract interface for the append-only briefing request log.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, BriefingLogEntry};

/// Repository interface for briefing log entries
///
/// Entries are immutable, so there is no update operation.
#[async_trait]
pub trait BriefingLogRepository: Send + Sync {
    /// Append an entry; the store assigns id and timestamp
    async fn record(&self, user_id: i64, city: &str) -> Result<BriefingLogEntry, DomainError>;

    /// Find all entries, oldest first
    async fn find_all(&self) -> Result<Vec<BriefingLogEntry>, DomainError>;

    /// Find an entry by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<BriefingLogEntry>, DomainError>;

    /// Delete an entry by ID, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
