//! Briefing log entry as exposed over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use briefing::BriefingLogEntry;

/// Briefing log response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BriefingLogResponse {
    pub id: i64,
    pub user_id: i64,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

impl From<BriefingLogEntry> for BriefingLogResponse {
    fn from(entry: BriefingLogEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            city: entry.city,
            created_at: entry.created_at,
        }
    }
}
