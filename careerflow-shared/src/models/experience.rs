/// Professional experience model and skill links
///
/// An experience is a position held at a company. A missing `end_date` means
/// the position is current. Skills are attached through the
/// `skill_experiences` join table; links are only ever created between a skill
/// and an experience that belong to the same user.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE professional_experiences (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     company VARCHAR(200) NOT NULL,
///     position VARCHAR(200) NOT NULL,
///     start_date TIMESTAMPTZ NOT NULL,
///     end_date TIMESTAMPTZ,
///     responsibilities TEXT NOT NULL,
///     is_paid BOOLEAN NOT NULL DEFAULT TRUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE TABLE skill_experiences (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     skill_id UUID NOT NULL REFERENCES skills(id) ON DELETE CASCADE,
///     experience_id UUID NOT NULL REFERENCES professional_experiences(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     CONSTRAINT skill_experiences_pair_key UNIQUE (skill_id, experience_id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::models::experience::{CreateExperience, ProfessionalExperience};
/// use chrono::{TimeZone, Utc};
/// use sqlx::{PgConnection, PgPool};
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, user_id: Uuid, rust_skill: Uuid) -> Result<(), sqlx::Error> {
/// let experience = ProfessionalExperience::create(&pool, CreateExperience {
///     user_id,
///     company: "Acme".to_string(),
///     position: "Backend Engineer".to_string(),
///     start_date: Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap(),
///     end_date: None,
///     responsibilities: "Built the billing service".to_string(),
///     is_paid: true,
/// }).await?;
///
/// // Foreign skill ids are silently skipped
/// ProfessionalExperience::replace_skills(&pool, experience.id, user_id, &[rust_skill]).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;
use crate::models::skill::Skill;

/// Serializes with a derived `is_current` flag, evaluated at serialization time
#[derive(Debug, Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct ProfessionalExperience {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: DateTime<Utc>,
    /// None while the position is held
    pub end_date: Option<DateTime<Utc>>,
    pub responsibilities: String,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExperience {
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub responsibilities: String,
    pub is_paid: bool,
}

impl Serialize for ProfessionalExperience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProfessionalExperience", 11)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("company", &self.company)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("start_date", &self.start_date)?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("responsibilities", &self.responsibilities)?;
        state.serialize_field("is_paid", &self.is_paid)?;
        state.serialize_field("is_current", &self.is_current())?;
        state.serialize_field("created_at", &self.created_at)?;
        state.serialize_field("updated_at", &self.updated_at)?;
        state.end()
    }
}

/// Partial update; None leaves the column unchanged
///
/// An end date cannot be cleared through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub responsibilities: Option<String>,
    pub is_paid: Option<bool>,
}

/// An experience together with the skills linked to it, ordered by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceWithSkills {
    #[serde(flatten)]
    pub experience: ProfessionalExperience,
    pub skills: Vec<Skill>,
}

/// Row shape of a skill joined to one of its experiences
#[derive(Debug, sqlx::FromRow)]
struct LinkedSkillRow {
    experience_id: Uuid,
    #[sqlx(flatten)]
    skill: Skill,
}

impl ProfessionalExperience {
    /// True when the position has no end date or ends after `now`
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date.map_or(true, |end| end > now)
    }

    pub fn is_current(&self) -> bool {
        self.is_current_at(Utc::now())
    }

    pub async fn create(pool: &PgPool, data: CreateExperience) -> Result<Self, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, data).await
    }

    /// Creates an experience and links the given skills in one transaction
    ///
    /// Only skills owned by the experience's user are linked. If linking
    /// fails the experience is not kept.
    pub async fn create_with_skills(
        pool: &PgPool,
        data: CreateExperience,
        skill_ids: &[Uuid],
    ) -> Result<(Self, u64), sqlx::Error> {
        let user_id = data.user_id;
        let mut tx = pool.begin().await?;

        let experience = Self::insert(&mut tx, data).await?;
        let linked = if skill_ids.is_empty() {
            0
        } else {
            Self::insert_skill_links(&mut tx, experience.id, user_id, skill_ids).await?
        };

        tx.commit().await?;

        Ok((experience, linked))
    }

    async fn insert(conn: &mut PgConnection, data: CreateExperience) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalExperience>(
            r#"
            INSERT INTO professional_experiences
                (user_id, company, position, start_date, end_date, responsibilities, is_paid)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, company, position, start_date, end_date,
                      responsibilities, is_paid, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.company)
        .bind(data.position)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.responsibilities)
        .bind(data.is_paid)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalExperience>(
            r#"
            SELECT id, user_id, company, position, start_date, end_date,
                   responsibilities, is_paid, created_at, updated_at
            FROM professional_experiences
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's experiences, most recent start first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalExperience>(
            r#"
            SELECT id, user_id, company, position, start_date, end_date,
                   responsibilities, is_paid, created_at, updated_at
            FROM professional_experiences
            WHERE user_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Lists a user's experiences with their linked skills
    ///
    /// Two queries: the experiences, then every link row of the user, grouped
    /// in memory.
    pub async fn list_with_skills(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ExperienceWithSkills>, sqlx::Error> {
        let experiences = Self::list_by_user(pool, user_id).await?;

        let rows = sqlx::query_as::<_, LinkedSkillRow>(
            r#"
            SELECT se.experience_id,
                   s.id, s.user_id, s.name, s.skill_type, s.level, s.created_at, s.updated_at
            FROM skill_experiences se
            JOIN skills s ON s.id = se.skill_id
            JOIN professional_experiences e ON e.id = se.experience_id
            WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let mut by_experience: HashMap<Uuid, Vec<Skill>> = HashMap::new();
        for row in rows {
            by_experience.entry(row.experience_id).or_default().push(row.skill);
        }

        Ok(experiences
            .into_iter()
            .map(|experience| {
                let skills = by_experience.remove(&experience.id).unwrap_or_default();
                ExperienceWithSkills::new(experience, skills)
            })
            .collect())
    }

    /// Loads one experience with its linked skills
    pub async fn find_with_skills(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<ExperienceWithSkills>, sqlx::Error> {
        let Some(experience) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let skills = Self::skills(pool, id).await?;

        Ok(Some(ExperienceWithSkills::new(experience, skills)))
    }

    /// Skills linked to one experience
    pub async fn skills(pool: &PgPool, experience_id: Uuid) -> Result<Vec<Skill>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            r#"
            SELECT s.id, s.user_id, s.name, s.skill_type, s.level, s.created_at, s.updated_at
            FROM skill_experiences se
            JOIN skills s ON s.id = se.skill_id
            WHERE se.experience_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(experience_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateExperience,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalExperience>(
            r#"
            UPDATE professional_experiences
            SET company = COALESCE($2, company),
                position = COALESCE($3, position),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                responsibilities = COALESCE($6, responsibilities),
                is_paid = COALESCE($7, is_paid),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, company, position, start_date, end_date,
                      responsibilities, is_paid, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.company)
        .bind(data.position)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.responsibilities)
        .bind(data.is_paid)
        .fetch_optional(pool)
        .await
    }

    /// Deletes an experience; its skill links go with it
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM professional_experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Links a skill to an experience
    ///
    /// Returns false when the link already existed.
    pub async fn link_skill(
        pool: &PgPool,
        experience_id: Uuid,
        skill_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO skill_experiences (skill_id, experience_id)
            VALUES ($1, $2)
            ON CONFLICT ON CONSTRAINT skill_experiences_pair_key DO NOTHING
            "#,
        )
        .bind(skill_id)
        .bind(experience_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes a skill link; returns false when there was none
    pub async fn unlink_skill(
        pool: &PgPool,
        experience_id: Uuid,
        skill_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM skill_experiences WHERE experience_id = $1 AND skill_id = $2")
                .bind(experience_id)
                .bind(skill_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replaces the whole link set of an experience
    ///
    /// Only skills owned by `user_id` are linked; other ids are skipped.
    /// Runs in a single transaction.
    ///
    /// # Returns
    ///
    /// Number of links created
    pub async fn replace_skills(
        pool: &PgPool,
        experience_id: Uuid,
        user_id: Uuid,
        skill_ids: &[Uuid],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM skill_experiences WHERE experience_id = $1")
            .bind(experience_id)
            .execute(&mut *tx)
            .await?;

        let inserted = Self::insert_skill_links(&mut tx, experience_id, user_id, skill_ids).await?;

        tx.commit().await?;

        Ok(inserted)
    }

    async fn insert_skill_links(
        conn: &mut PgConnection,
        experience_id: Uuid,
        user_id: Uuid,
        skill_ids: &[Uuid],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO skill_experiences (skill_id, experience_id)
            SELECT id, $1 FROM skills
            WHERE user_id = $2 AND id = ANY($3)
            ON CONFLICT ON CONSTRAINT skill_experiences_pair_key DO NOTHING
            "#,
        )
        .bind(experience_id)
        .bind(user_id)
        .bind(skill_ids)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }
}

impl ExperienceWithSkills {
    /// Pairs an experience with its skills, sorting the skills by name
    pub fn new(experience: ProfessionalExperience, mut skills: Vec<Skill>) -> Self {
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Self { experience, skills }
    }

    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.experience.is_current_at(now)
    }
}

impl OwnedResource for ProfessionalExperience {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl OwnedResource for ExperienceWithSkills {
    fn owner_id(&self) -> Uuid {
        self.experience.user_id
    }
}

/// Orders experiences by start date, most recent first
pub fn sort_experiences(experiences: &mut [ExperienceWithSkills]) {
    experiences.sort_by(|a, b| b.experience.start_date.cmp(&a.experience.start_date));
}
