/// Skill model and database operations
///
/// Skills are categorized by [`SkillType`] and rated by [`SkillLevel`]. They
/// can be linked to any number of the owner's professional experiences
/// through the `skill_experiences` join table (see
/// [`crate::models::experience`]).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE skills (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     name VARCHAR(200) NOT NULL,
///     skill_type skill_type NOT NULL,
///     level skill_level NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Ordering
///
/// Listings are ordered by level, strongest first, then by name. The
/// `skill_level` enum is declared weakest to strongest, so `ORDER BY level DESC`
/// yields that order directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;
use crate::models::enums::{ProfileEnum, SkillLevel, SkillType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub skill_type: SkillType,
    pub level: SkillLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkill {
    pub user_id: Uuid,
    pub name: String,
    pub skill_type: SkillType,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub skill_type: Option<SkillType>,
    pub level: Option<SkillLevel>,
}

/// Optional listing filters; None matches everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub skill_type: Option<SkillType>,
    pub level: Option<SkillLevel>,
}

impl SkillFilter {
    pub fn matches(&self, skill: &Skill) -> bool {
        self.skill_type.map_or(true, |t| t == skill.skill_type)
            && self.level.map_or(true, |l| l == skill.level)
    }
}

/// Orders skills by level (strongest first), then by name
pub fn sort_skills(skills: &mut [Skill]) {
    skills.sort_by(|a, b| {
        b.level
            .rank()
            .cmp(&a.level.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}

impl Skill {
    pub async fn create(pool: &PgPool, data: CreateSkill) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, name, skill_type, level)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, skill_type, level, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.skill_type)
        .bind(data.level)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, user_id, name, skill_type, level, created_at, updated_at
            FROM skills
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's skills, optionally filtered by type and level
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
        filter: SkillFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, user_id, name, skill_type, level, created_at, updated_at
            FROM skills
            WHERE user_id = $1
              AND ($2::skill_type IS NULL OR skill_type = $2)
              AND ($3::skill_level IS NULL OR level = $3)
            ORDER BY level DESC, name
            "#,
        )
        .bind(user_id)
        .bind(filter.skill_type)
        .bind(filter.level)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateSkill,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = COALESCE($2, name),
                skill_type = COALESCE($3, skill_type),
                level = COALESCE($4, level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, name, skill_type, level, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.skill_type)
        .bind(data.level)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a skill; its experience links go with it
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for Skill {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
