/// Social media links
///
/// A user may register one link per platform (enforced by
/// `social_medias_user_platform_key`).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE social_medias (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     platform VARCHAR(100) NOT NULL,
///     url VARCHAR(500) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     CONSTRAINT social_medias_user_platform_key UNIQUE (user_id, platform)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;

/// Name of the constraint rejecting a second link for the same platform
pub const PLATFORM_UNIQUE_CONSTRAINT: &str = "social_medias_user_platform_key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SocialMedia {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Platform name, e.g. "LinkedIn" or "GitHub"
    pub platform: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSocialMedia {
    pub user_id: Uuid,
    pub platform: String,
    pub url: String,
}

/// Partial update; None leaves the column unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSocialMedia {
    pub platform: Option<String>,
    pub url: Option<String>,
}

impl SocialMedia {
    pub async fn create(pool: &PgPool, data: CreateSocialMedia) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            r#"
            INSERT INTO social_medias (user_id, platform, url)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, platform, url, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.platform)
        .bind(data.url)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            r#"
            SELECT id, user_id, platform, url, created_at, updated_at
            FROM social_medias
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's links ordered by platform name
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            r#"
            SELECT id, user_id, platform, url, created_at, updated_at
            FROM social_medias
            WHERE user_id = $1
            ORDER BY platform
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateSocialMedia,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            r#"
            UPDATE social_medias
            SET platform = COALESCE($2, platform),
                url = COALESCE($3, url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, platform, url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.platform)
        .bind(data.url)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_medias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for SocialMedia {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
