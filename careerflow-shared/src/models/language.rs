/// Spoken language model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE languages (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     name VARCHAR(100) NOT NULL,
///     level language_level NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;
use crate::models::enums::LanguageLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Language {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub level: LanguageLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLanguage {
    pub user_id: Uuid,
    pub name: String,
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLanguage {
    pub name: Option<String>,
    pub level: Option<LanguageLevel>,
}

impl Language {
    pub async fn create(pool: &PgPool, data: CreateLanguage) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            r#"
            INSERT INTO languages (user_id, name, level)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, level, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.level)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            "SELECT id, user_id, name, level, created_at, updated_at FROM languages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's languages, strongest level first, then by name
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            r#"
            SELECT id, user_id, name, level, created_at, updated_at
            FROM languages
            WHERE user_id = $1
            ORDER BY level DESC, name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateLanguage,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            r#"
            UPDATE languages
            SET name = COALESCE($2, name),
                level = COALESCE($3, level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, name, level, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.level)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for Language {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
