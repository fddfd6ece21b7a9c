/// Per-user resume operations
///
/// [`AtsExporter`] loads a user's [`ResumeData`] through a [`ProfileStore`]
/// and runs one of the pure projections over it. Each call performs a
/// fresh load.
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::resume::{AtsExporter, PgProfileStore};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, user_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let exporter = AtsExporter::new(PgProfileStore::new(pool));
///
/// let text = exporter.generate_text(user_id).await?;
/// let score = exporter.score(user_id).await?;
/// println!("{} (score {})", text, score);
/// # Ok(())
/// # }
/// ```

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{
    ats::AtsResume,
    data::{load_resume_data, ResumeData, ResumeError},
    keywords::extract_keywords,
    score::ats_score,
    store::ProfileStore,
    text::render_text,
};

#[derive(Debug, Clone)]
pub struct AtsExporter<S> {
    store: S,
}

impl<S: ProfileStore> AtsExporter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The sorted aggregate
    pub async fn resume_data(&self, user_id: Uuid) -> Result<ResumeData, ResumeError> {
        load_resume_data(&self.store, user_id).await
    }

    /// Structured resume
    pub async fn generate_resume(&self, user_id: Uuid) -> Result<AtsResume, ResumeError> {
        let data = self.resume_data(user_id).await?;
        Ok(AtsResume::from(&data))
    }

    /// Plain-text resume stamped with the current time
    pub async fn generate_text(&self, user_id: Uuid) -> Result<String, ResumeError> {
        let resume = self.generate_resume(user_id).await?;
        let text = render_text(&resume, Utc::now());

        info!(user_id = %user_id, bytes = text.len(), "Generated text resume");
        Ok(text)
    }

    /// Pretty-printed camelCase JSON of the structured resume
    pub async fn generate_json(&self, user_id: Uuid) -> Result<Vec<u8>, ResumeError> {
        let resume = self.generate_resume(user_id).await?;
        let json = serde_json::to_vec_pretty(&resume)?;

        info!(user_id = %user_id, bytes = json.len(), "Generated JSON resume");
        Ok(json)
    }

    pub async fn keywords(&self, user_id: Uuid) -> Result<Vec<String>, ResumeError> {
        let data = self.resume_data(user_id).await?;
        Ok(extract_keywords(&data))
    }

    /// Score in `0..=100`, evaluated against the current time
    pub async fn score(&self, user_id: Uuid) -> Result<u8, ResumeError> {
        let data = self.resume_data(user_id).await?;
        Ok(ats_score(&data, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{LanguageLevel, SkillLevel, SkillType};
    use crate::resume::fixtures::{self, InMemoryStore};

    fn populated_store() -> (InMemoryStore, Uuid) {
        let mut user = fixtures::user("Ana Lima");
        user.city = Some("Recife".to_string());
        user.state = Some("PE".to_string());
        let id = user.id;

        let mut store = InMemoryStore::with_user(user);
        store.summaries = vec![fixtures::summary(id, "Backend engineer.")];
        store.skills = vec![
            fixtures::skill(id, "Rust", SkillType::Backend, SkillLevel::Advanced),
            fixtures::skill(id, "PostgreSQL", SkillType::Database, SkillLevel::Intermediate),
        ];

        let mut current = fixtures::experience(id, "Acme", "Staff Engineer", (2021, 3, 1), None);
        current.experience.responsibilities = "Own the billing platform\nMentor engineers".to_string();
        current.skills = vec![store.skills[1].clone(), store.skills[0].clone()];
        store.experiences = vec![current];

        store.languages = vec![fixtures::language(id, "English", LanguageLevel::Advanced)];
        (store, id)
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let exporter = AtsExporter::new(InMemoryStore::default());
        let missing = Uuid::new_v4();

        assert!(matches!(
            exporter.generate_resume(missing).await,
            Err(ResumeError::UserNotFound(_))
        ));
        assert!(matches!(exporter.score(missing).await, Err(ResumeError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_profile() {
        let user = fixtures::user("Ana Lima");
        let id = user.id;
        let exporter = AtsExporter::new(InMemoryStore::with_user(user));

        assert_eq!(exporter.score(id).await.unwrap(), 0);
        assert!(exporter.keywords(id).await.unwrap().is_empty());

        let text = exporter.generate_text(id).await.unwrap();
        assert!(text.contains("CONTACT INFORMATION"));
        assert!(!text.contains("SKILLS"));
        assert!(!text.contains("PROFESSIONAL EXPERIENCE"));
    }

    #[tokio::test]
    async fn test_generate_resume() {
        let (store, id) = populated_store();
        let exporter = AtsExporter::new(store);

        let resume = exporter.generate_resume(id).await.unwrap();
        assert_eq!(resume.location, "Recife, PE");
        assert_eq!(resume.professional_summary, "Backend engineer.");
        assert_eq!(resume.skills[0].name, "Rust");
        assert_eq!(resume.experiences[0].skills_used, vec!["PostgreSQL", "Rust"]);
        assert_eq!(resume.experiences[0].period, "03/2021 - Present");
    }

    #[tokio::test]
    async fn test_json_round_trip() {
        let (store, id) = populated_store();
        let exporter = AtsExporter::new(store);

        let bytes = exporter.generate_json(id).await.unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains("\n  \"fullName\": \"Ana Lima\""));

        let parsed: AtsResume = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, exporter.generate_resume(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_keywords_and_score() {
        let (store, id) = populated_store();
        let exporter = AtsExporter::new(store);

        assert_eq!(
            exporter.keywords(id).await.unwrap(),
            vec!["Rust", "PostgreSQL", "Staff Engineer", "Acme"]
        );
        // summary 10, skills 20, experience 30, languages 10, current 5, advanced 2
        assert_eq!(exporter.score(id).await.unwrap(), 77);
    }
}
