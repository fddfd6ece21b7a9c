/// Professional summary model
///
/// Each user has at most one summary. Writes go through [`ProfessionalSummary::upsert`],
/// which replaces the existing text in place.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE professional_summaries (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     summary TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     CONSTRAINT professional_summaries_user_key UNIQUE (user_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfessionalSummary {
    /// Finds the summary of a user
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalSummary>(
            r#"
            SELECT id, user_id, summary, created_at, updated_at
            FROM professional_summaries
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Creates the user's summary or replaces the existing one
    pub async fn upsert(pool: &PgPool, user_id: Uuid, summary: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalSummary>(
            r#"
            INSERT INTO professional_summaries (user_id, summary)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET summary = EXCLUDED.summary, updated_at = NOW()
            RETURNING id, user_id, summary, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(summary)
        .fetch_one(pool)
        .await
    }

    /// Deletes the user's summary
    ///
    /// Returns false when the user had no summary.
    pub async fn delete_by_user(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM professional_summaries WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for ProfessionalSummary {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
