/// Builders and an in-memory [`ProfileStore`] for resume tests

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use super::store::{ProfileStore, StoreResult};
use crate::models::{
    academic::AcademicBackground,
    certificate::Certificate,
    enums::{EducationLevel, LanguageLevel, SkillLevel, SkillType},
    experience::{ExperienceWithSkills, ProfessionalExperience},
    language::Language,
    skill::Skill,
    social_media::SocialMedia,
    summary::ProfessionalSummary,
    user::User,
};

pub type Ymd = (i32, u32, u32);

pub fn date((y, m, d): Ymd) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn created() -> DateTime<Utc> {
    date((2024, 1, 1))
}

pub fn user(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        password_hash: String::new(),
        phone: None,
        city: None,
        state: None,
        photo_path: None,
        created_at: created(),
        updated_at: created(),
    }
}

pub fn summary(user_id: Uuid, text: &str) -> ProfessionalSummary {
    ProfessionalSummary {
        id: Uuid::new_v4(),
        user_id,
        summary: text.to_string(),
        created_at: created(),
        updated_at: created(),
    }
}

pub fn social(user_id: Uuid, platform: &str) -> SocialMedia {
    SocialMedia {
        id: Uuid::new_v4(),
        user_id,
        platform: platform.to_string(),
        url: format!("https://{}.com/someone", platform.to_lowercase()),
        created_at: created(),
        updated_at: created(),
    }
}

pub fn skill(user_id: Uuid, name: &str, skill_type: SkillType, level: SkillLevel) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        skill_type,
        level,
        created_at: created(),
        updated_at: created(),
    }
}

pub fn experience(
    user_id: Uuid,
    company: &str,
    position: &str,
    start: Ymd,
    end: Option<Ymd>,
) -> ExperienceWithSkills {
    ExperienceWithSkills::new(
        ProfessionalExperience {
            id: Uuid::new_v4(),
            user_id,
            company: company.to_string(),
            position: position.to_string(),
            start_date: date(start),
            end_date: end.map(date),
            responsibilities: String::new(),
            is_paid: true,
            created_at: created(),
            updated_at: created(),
        },
        Vec::new(),
    )
}

pub fn academic(
    user_id: Uuid,
    course_name: &str,
    level: EducationLevel,
    start: Ymd,
) -> AcademicBackground {
    AcademicBackground {
        id: Uuid::new_v4(),
        user_id,
        institution: "State University".to_string(),
        course_name: course_name.to_string(),
        level,
        start_date: date(start),
        end_date: None,
        diploma_path: None,
        created_at: created(),
        updated_at: created(),
    }
}

pub fn certificate(user_id: Uuid, name: &str, start: Ymd, end: Option<Ymd>) -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        description: None,
        start_date: date(start),
        end_date: end.map(date),
        certificate_path: None,
        created_at: created(),
        updated_at: created(),
    }
}

pub fn language(user_id: Uuid, name: &str, level: LanguageLevel) -> Language {
    Language {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        level,
        created_at: created(),
        updated_at: created(),
    }
}

/// Store holding plain vectors; every read filters by user
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    pub users: Vec<User>,
    pub summaries: Vec<ProfessionalSummary>,
    pub social_medias: Vec<SocialMedia>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<ExperienceWithSkills>,
    pub academics: Vec<AcademicBackground>,
    pub certificates: Vec<Certificate>,
    pub languages: Vec<Language>,
}

impl InMemoryStore {
    pub fn with_user(user: User) -> Self {
        Self {
            users: vec![user],
            ..Default::default()
        }
    }
}

fn owned_by<T: Clone>(items: &[T], user_id: Uuid, owner: impl Fn(&T) -> Uuid) -> Vec<T> {
    items
        .iter()
        .filter(|item| owner(item) == user_id)
        .cloned()
        .collect()
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn user(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn summary(&self, user_id: Uuid) -> StoreResult<Option<ProfessionalSummary>> {
        Ok(self.summaries.iter().find(|s| s.user_id == user_id).cloned())
    }

    async fn social_medias(&self, user_id: Uuid) -> StoreResult<Vec<SocialMedia>> {
        Ok(owned_by(&self.social_medias, user_id, |s| s.user_id))
    }

    async fn skills(&self, user_id: Uuid) -> StoreResult<Vec<Skill>> {
        Ok(owned_by(&self.skills, user_id, |s| s.user_id))
    }

    async fn experiences(&self, user_id: Uuid) -> StoreResult<Vec<ExperienceWithSkills>> {
        Ok(owned_by(&self.experiences, user_id, |e| e.experience.user_id))
    }

    async fn academics(&self, user_id: Uuid) -> StoreResult<Vec<AcademicBackground>> {
        Ok(owned_by(&self.academics, user_id, |a| a.user_id))
    }

    async fn certificates(&self, user_id: Uuid) -> StoreResult<Vec<Certificate>> {
        Ok(owned_by(&self.certificates, user_id, |c| c.user_id))
    }

    async fn languages(&self, user_id: Uuid) -> StoreResult<Vec<Language>> {
        Ok(owned_by(&self.languages, user_id, |l| l.user_id))
    }
}
