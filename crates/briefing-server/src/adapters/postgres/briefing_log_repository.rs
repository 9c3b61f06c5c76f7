//! PostgreSQL implementation of BriefingLogRepository

use async_trait::async_trait;
use sqlx::PgPool;

use briefing::{BriefingLogEntry, BriefingLogRepository, DomainError};

/// PostgreSQL implementation of BriefingLogRepository
pub struct PgBriefingLogRepository {
    pool: PgPool,
}

impl PgBriefingLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BriefingLogRow {
    id: i64,
    user_id: i64,
    city: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BriefingLogRow> for BriefingLogEntry {
    fn from(row: BriefingLogRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            city: row.city,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BriefingLogRepository for PgBriefingLogRepository {
    async fn record(&self, user_id: i64, city: &str) -> Result<BriefingLogEntry, DomainError> {
        let row = sqlx::query_as::<_, BriefingLogRow>(
            r#"
            INSERT INTO briefing_logs (user_id, city)
            VALUES ($1, $2)
            RETURNING id, user_id, city, created_at
            "#,
        )
        .bind(user_id)
        .bind(city)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<BriefingLogEntry>, DomainError> {
        let rows = sqlx::query_as::<_, BriefingLogRow>(
            "SELECT id, user_id, city, created_at FROM briefing_logs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BriefingLogEntry>, DomainError> {
        let row = sqlx::query_as::<_, BriefingLogRow>(
            "SELECT id, user_id, city, created_at FROM briefing_logs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM briefing_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
