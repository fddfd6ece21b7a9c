/// Database models for CareerFlow
///
/// Each model owns its SQL: the struct derives `sqlx::FromRow` and an
/// `impl` block exposes async CRUD functions taking a `&PgPool`.
///
/// # Models
///
/// - `enums`: skill types, skill levels, education levels, language levels
/// - `user`: accounts and contact details
/// - `summary`: the single professional summary of a user
/// - `social_media`: one link per platform
/// - `skill`: categorized, leveled skills
/// - `experience`: professional experiences and their skill links
/// - `academic`: academic backgrounds
/// - `certificate`: certificates with optional expiration
/// - `language`: spoken languages
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::models::skill::{CreateSkill, Skill, SkillFilter};
/// use careerflow_shared::models::enums::{SkillLevel, SkillType};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
/// Skill::create(&pool, CreateSkill {
///     user_id,
///     name: "Rust".to_string(),
///     skill_type: SkillType::Backend,
///     level: SkillLevel::Advanced,
/// }).await?;
///
/// let backend = Skill::list_by_user(&pool, user_id, SkillFilter {
///     skill_type: Some(SkillType::Backend),
///     level: None,
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod academic;
pub mod certificate;
pub mod enums;
pub mod experience;
pub mod language;
pub mod skill;
pub mod social_media;
pub mod summary;
pub mod user;
