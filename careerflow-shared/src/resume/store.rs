/// Read access to a user's profile collections
///
/// The aggregator only needs per-user reads, so it depends on this trait
/// rather than on a pool. [`PgProfileStore`] is the PostgreSQL
/// implementation; tests substitute an in-memory one.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    academic::AcademicBackground,
    certificate::Certificate,
    experience::{ExperienceWithSkills, ProfessionalExperience},
    language::Language,
    skill::{Skill, SkillFilter},
    social_media::SocialMedia,
    summary::ProfessionalSummary,
    user::User,
};

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Per-user reads over every profile collection
///
/// Implementations need not order their results; the aggregator sorts.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn user(&self, user_id: Uuid) -> StoreResult<Option<User>>;

    async fn summary(&self, user_id: Uuid) -> StoreResult<Option<ProfessionalSummary>>;

    async fn social_medias(&self, user_id: Uuid) -> StoreResult<Vec<SocialMedia>>;

    async fn skills(&self, user_id: Uuid) -> StoreResult<Vec<Skill>>;

    /// Experiences with their linked skills
    async fn experiences(&self, user_id: Uuid) -> StoreResult<Vec<ExperienceWithSkills>>;

    async fn academics(&self, user_id: Uuid) -> StoreResult<Vec<AcademicBackground>>;

    async fn certificates(&self, user_id: Uuid) -> StoreResult<Vec<Certificate>>;

    async fn languages(&self, user_id: Uuid) -> StoreResult<Vec<Language>>;
}

/// [`ProfileStore`] backed by the model queries
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn user(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        User::find_by_id(&self.pool, user_id).await
    }

    async fn summary(&self, user_id: Uuid) -> StoreResult<Option<ProfessionalSummary>> {
        ProfessionalSummary::find_by_user(&self.pool, user_id).await
    }

    async fn social_medias(&self, user_id: Uuid) -> StoreResult<Vec<SocialMedia>> {
        SocialMedia::list_by_user(&self.pool, user_id).await
    }

    async fn skills(&self, user_id: Uuid) -> StoreResult<Vec<Skill>> {
        Skill::list_by_user(&self.pool, user_id, SkillFilter::default()).await
    }

    async fn experiences(&self, user_id: Uuid) -> StoreResult<Vec<ExperienceWithSkills>> {
        ProfessionalExperience::list_with_skills(&self.pool, user_id).await
    }

    async fn academics(&self, user_id: Uuid) -> StoreResult<Vec<AcademicBackground>> {
        AcademicBackground::list_by_user(&self.pool, user_id).await
    }

    async fn certificates(&self, user_id: Uuid) -> StoreResult<Vec<Certificate>> {
        Certificate::list_by_user(&self.pool, user_id).await
    }

    async fn languages(&self, user_id: Uuid) -> StoreResult<Vec<Language>> {
        Language::list_by_user(&self.pool, user_id).await
    }
}
