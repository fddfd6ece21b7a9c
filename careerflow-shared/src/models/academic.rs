/// Academic background model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE academic_backgrounds (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     institution VARCHAR(200) NOT NULL,
///     course_name VARCHAR(200) NOT NULL,
///     level education_level NOT NULL,
///     start_date TIMESTAMPTZ NOT NULL,
///     end_date TIMESTAMPTZ,
///     diploma_path VARCHAR(500),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;
use crate::models::enums::EducationLevel;

/// Serializes with a derived `is_current` flag, evaluated at serialization time
#[derive(Debug, Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct AcademicBackground {
    pub id: Uuid,
    pub user_id: Uuid,
    pub institution: String,
    pub course_name: String,
    pub level: EducationLevel,
    pub start_date: DateTime<Utc>,
    /// None while the course is in progress
    pub end_date: Option<DateTime<Utc>>,
    pub diploma_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Serialize for AcademicBackground {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AcademicBackground", 11)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("institution", &self.institution)?;
        state.serialize_field("course_name", &self.course_name)?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("start_date", &self.start_date)?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("diploma_path", &self.diploma_path)?;
        state.serialize_field("is_current", &self.is_current())?;
        state.serialize_field("created_at", &self.created_at)?;
        state.serialize_field("updated_at", &self.updated_at)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAcademic {
    pub user_id: Uuid,
    pub institution: String,
    pub course_name: String,
    pub level: EducationLevel,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub diploma_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAcademic {
    pub institution: Option<String>,
    pub course_name: Option<String>,
    pub level: Option<EducationLevel>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub diploma_path: Option<String>,
}

impl AcademicBackground {
    /// True while the course has no end date or ends after `now`
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date.map_or(true, |end| end > now)
    }

    pub fn is_current(&self) -> bool {
        self.is_current_at(Utc::now())
    }

    pub async fn create(pool: &PgPool, data: CreateAcademic) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, AcademicBackground>(
            r#"
            INSERT INTO academic_backgrounds
                (user_id, institution, course_name, level, start_date, end_date, diploma_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, institution, course_name, level, start_date, end_date,
                      diploma_path, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.institution)
        .bind(data.course_name)
        .bind(data.level)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.diploma_path)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, AcademicBackground>(
            r#"
            SELECT id, user_id, institution, course_name, level, start_date, end_date,
                   diploma_path, created_at, updated_at
            FROM academic_backgrounds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's academic backgrounds, most recent start first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, AcademicBackground>(
            r#"
            SELECT id, user_id, institution, course_name, level, start_date, end_date,
                   diploma_path, created_at, updated_at
            FROM academic_backgrounds
            WHERE user_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateAcademic,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, AcademicBackground>(
            r#"
            UPDATE academic_backgrounds
            SET institution = COALESCE($2, institution),
                course_name = COALESCE($3, course_name),
                level = COALESCE($4, level),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                diploma_path = COALESCE($7, diploma_path),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, institution, course_name, level, start_date, end_date,
                      diploma_path, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.institution)
        .bind(data.course_name)
        .bind(data.level)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.diploma_path)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM academic_backgrounds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for AcademicBackground {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
