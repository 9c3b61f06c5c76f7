//! BriefingLogEntry - Persisted record of a served briefing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row per briefing served over HTTP. Never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingLogEntry {
    /// Assigned by the store
    pub id: i64,
    pub user_id: i64,
    pub city: String,
    pub created_at: DateTime<Utc>,
}
