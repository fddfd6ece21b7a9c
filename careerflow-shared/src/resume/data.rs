/// The per-user profile aggregate
///
/// [`load_resume_data`] reads every collection of one user through a
/// [`ProfileStore`] and returns them in display order. The reads run
/// concurrently and are not a consistent snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::store::ProfileStore;
use crate::models::{
    academic::AcademicBackground,
    certificate::Certificate,
    enums::ProfileEnum,
    experience::{sort_experiences, ExperienceWithSkills},
    language::Language,
    skill::{sort_skills, Skill},
    social_media::SocialMedia,
    summary::ProfessionalSummary,
    user::User,
};

/// Errors raised while building or exporting a resume
#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Failed to serialize resume: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything a resume is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub user: User,
    pub summary: Option<ProfessionalSummary>,
    /// Ordered by platform
    pub social_medias: Vec<SocialMedia>,
    /// Ordered by level (strongest first), then name
    pub skills: Vec<Skill>,
    /// Ordered by start date, most recent first; linked skills by name
    pub experiences: Vec<ExperienceWithSkills>,
    /// Ordered by start date, most recent first
    pub academics: Vec<AcademicBackground>,
    /// Ordered by start date, most recent first
    pub certificates: Vec<Certificate>,
    /// Ordered by level (strongest first), then name
    pub languages: Vec<Language>,
}

impl ResumeData {
    /// An aggregate holding only the user
    pub fn empty(user: User) -> Self {
        Self {
            user,
            summary: None,
            social_medias: Vec::new(),
            skills: Vec::new(),
            experiences: Vec::new(),
            academics: Vec::new(),
            certificates: Vec::new(),
            languages: Vec::new(),
        }
    }

    /// Summary text, if present and not blank
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_ref()
            .map(|s| s.summary.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    /// Applies the display order to every collection
    pub fn sort(&mut self) {
        self.social_medias.sort_by(|a, b| a.platform.cmp(&b.platform));

        sort_skills(&mut self.skills);

        for experience in &mut self.experiences {
            experience.skills.sort_by(|a, b| a.name.cmp(&b.name));
        }
        sort_experiences(&mut self.experiences);

        self.academics.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        self.certificates.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        self.languages.sort_by(|a, b| {
            b.level
                .rank()
                .cmp(&a.level.rank())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}

/// Reads the full profile of `user_id`
///
/// # Errors
///
/// - [`ResumeError::UserNotFound`] when the user does not exist
/// - [`ResumeError::Store`] when any read fails
pub async fn load_resume_data<S>(store: &S, user_id: Uuid) -> Result<ResumeData, ResumeError>
where
    S: ProfileStore + ?Sized,
{
    let user = store
        .user(user_id)
        .await?
        .ok_or(ResumeError::UserNotFound(user_id))?;

    let (summary, social_medias, skills, experiences, academics, certificates, languages) = tokio::try_join!(
        store.summary(user_id),
        store.social_medias(user_id),
        store.skills(user_id),
        store.experiences(user_id),
        store.academics(user_id),
        store.certificates(user_id),
        store.languages(user_id),
    )?;

    let mut data = ResumeData {
        user,
        summary,
        social_medias,
        skills,
        experiences,
        academics,
        certificates,
        languages,
    };
    data.sort();

    debug!(
        user_id = %user_id,
        skills = data.skills.len(),
        experiences = data.experiences.len(),
        academics = data.academics.len(),
        certificates = data.certificates.len(),
        languages = data.languages.len(),
        "Loaded resume data"
    );

    Ok(data)
}
