/// Structured ATS resume
///
/// A flat, label-only projection of [`ResumeData`]: no ids, no enum codes,
/// dates already formatted. Serializes to camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data::ResumeData;
use crate::models::{
    academic::AcademicBackground,
    certificate::Certificate,
    enums::ProfileEnum,
    experience::ExperienceWithSkills,
    language::Language,
    skill::Skill,
};

/// Shown in place of an end date for ongoing periods
pub const PRESENT: &str = "Present";

/// Validity of certificates without an end date
pub const NO_EXPIRATION: &str = "No expiration";

/// Issuer used when a certificate has no description
pub const DEFAULT_ISSUER: &str = "Certificate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub professional_summary: String,
    pub skills: Vec<AtsSkill>,
    pub experiences: Vec<AtsExperience>,
    pub education: Vec<AtsEducation>,
    pub certifications: Vec<AtsCertification>,
    pub languages: Vec<AtsLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsSkill {
    pub name: String,
    /// Type label, e.g. "Cloud & DevOps"
    #[serde(rename = "type")]
    pub skill_type: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsExperience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub skills_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsEducation {
    pub institution: String,
    /// "<course> - <level label>"
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCertification {
    pub name: String,
    pub issuer: String,
    /// "MM/YYYY" of the end date, or [`NO_EXPIRATION`]
    pub validity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsLanguage {
    pub language: String,
    pub proficiency: String,
}

/// Formats a date as `MM/YYYY`
pub fn format_month(date: DateTime<Utc>) -> String {
    date.format("%m/%Y").to_string()
}

/// `MM/YYYY - MM/YYYY`, or `MM/YYYY - Present` when there is no end
pub fn format_period(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    let end = end.map_or_else(|| PRESENT.to_string(), format_month);
    format!("{} - {}", format_month(start), end)
}

/// Splits on newlines, trims each line and drops blank ones
pub fn split_responsibilities(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<&Skill> for AtsSkill {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            skill_type: skill.skill_type.label().to_string(),
            level: skill.level.label().to_string(),
        }
    }
}

impl From<&ExperienceWithSkills> for AtsExperience {
    fn from(item: &ExperienceWithSkills) -> Self {
        let experience = &item.experience;
        Self {
            company: experience.company.clone(),
            position: experience.position.clone(),
            period: format_period(experience.start_date, experience.end_date),
            responsibilities: split_responsibilities(&experience.responsibilities),
            skills_used: item.skills.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

impl From<&AcademicBackground> for AtsEducation {
    fn from(academic: &AcademicBackground) -> Self {
        Self {
            institution: academic.institution.clone(),
            degree: format!("{} - {}", academic.course_name, academic.level.label()),
            period: format_period(academic.start_date, academic.end_date),
        }
    }
}

impl From<&Certificate> for AtsCertification {
    fn from(certificate: &Certificate) -> Self {
        let issuer = certificate
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_ISSUER);

        Self {
            name: certificate.name.clone(),
            issuer: issuer.to_string(),
            validity: certificate
                .end_date
                .map_or_else(|| NO_EXPIRATION.to_string(), format_month),
        }
    }
}

impl From<&Language> for AtsLanguage {
    fn from(language: &Language) -> Self {
        Self {
            language: language.name.clone(),
            proficiency: language.level.label().to_string(),
        }
    }
}

impl From<&ResumeData> for AtsResume {
    fn from(data: &ResumeData) -> Self {
        let user = &data.user;

        Self {
            full_name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            location: user.location(),
            professional_summary: data.summary_text().unwrap_or_default().to_string(),
            skills: data.skills.iter().map(AtsSkill::from).collect(),
            experiences: data.experiences.iter().map(AtsExperience::from).collect(),
            education: data.academics.iter().map(AtsEducation::from).collect(),
            certifications: data.certificates.iter().map(AtsCertification::from).collect(),
            languages: data.languages.iter().map(AtsLanguage::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{EducationLevel, LanguageLevel, SkillLevel, SkillType};
    use crate::resume::fixtures::{self, date};

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period(date((2020, 3, 1)), Some(date((2023, 6, 15)))),
            "03/2020 - 06/2023"
        );
        assert_eq!(format_period(date((2020, 1, 1)), None), "01/2020 - Present");
    }

    #[test]
    fn test_split_responsibilities() {
        let lines = split_responsibilities("  Built APIs \n\n   \nLed team\r\n");
        assert_eq!(lines, vec!["Built APIs", "Led team"]);
        assert!(split_responsibilities("").is_empty());
    }

    #[test]
    fn test_contact_fields() {
        let mut user = fixtures::user("Ana Lima");
        user.phone = Some("+55 11 99999-0000".to_string());
        user.city = Some("Campinas".to_string());
        user.state = Some("SP".to_string());

        let resume = AtsResume::from(&ResumeData::empty(user));
        assert_eq!(resume.full_name, "Ana Lima");
        assert_eq!(resume.email, "ana.lima@example.com");
        assert_eq!(resume.phone, "+55 11 99999-0000");
        assert_eq!(resume.location, "Campinas, SP");
        assert_eq!(resume.professional_summary, "");
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_missing_contact_fields_are_empty() {
        let resume = AtsResume::from(&ResumeData::empty(fixtures::user("Ana Lima")));
        assert_eq!(resume.phone, "");
        assert_eq!(resume.location, "");
    }

    #[test]
    fn test_entries_use_labels() {
        let user = fixtures::user("Ana Lima");
        let id = user.id;
        let mut data = ResumeData::empty(user);

        data.skills = vec![fixtures::skill(id, "Kubernetes", SkillType::CloudDevops, SkillLevel::Advanced)];
        data.academics = vec![fixtures::academic(
            id,
            "Software Engineering",
            EducationLevel::Masters,
            (2019, 2, 1),
        )];
        data.languages = vec![fixtures::language(id, "English", LanguageLevel::Fluent)];

        let resume = AtsResume::from(&data);
        assert_eq!(
            resume.skills[0],
            AtsSkill {
                name: "Kubernetes".to_string(),
                skill_type: "Cloud & DevOps".to_string(),
                level: "Advanced".to_string(),
            }
        );
        assert_eq!(resume.education[0].degree, "Software Engineering - Master's");
        assert_eq!(resume.education[0].period, "02/2019 - Present");
        assert_eq!(resume.languages[0].proficiency, "Fluent/Native");
    }

    #[test]
    fn test_experience_projection() {
        let user = fixtures::user("Ana Lima");
        let id = user.id;
        let mut item = fixtures::experience(id, "Acme", "Engineer", (2020, 3, 1), Some((2023, 6, 15)));
        item.experience.responsibilities = "Design services\n\n  Review code  ".to_string();
        item.skills = vec![
            fixtures::skill(id, "Docker", SkillType::CloudDevops, SkillLevel::Intermediate),
            fixtures::skill(id, "Rust", SkillType::Backend, SkillLevel::Advanced),
        ];

        let experience = AtsExperience::from(&item);
        assert_eq!(experience.period, "03/2020 - 06/2023");
        assert_eq!(experience.responsibilities, vec!["Design services", "Review code"]);
        assert_eq!(experience.skills_used, vec!["Docker", "Rust"]);
    }

    #[test]
    fn test_certification_issuer_and_validity() {
        let id = uuid::Uuid::new_v4();
        let mut cert = fixtures::certificate(id, "AWS SAA", (2022, 1, 10), Some((2025, 1, 10)));

        let projected = AtsCertification::from(&cert);
        assert_eq!(projected.issuer, DEFAULT_ISSUER);
        assert_eq!(projected.validity, "01/2025");

        cert.description = Some("Amazon Web Services".to_string());
        cert.end_date = None;
        let projected = AtsCertification::from(&cert);
        assert_eq!(projected.issuer, "Amazon Web Services");
        assert_eq!(projected.validity, NO_EXPIRATION);
    }

    #[test]
    fn test_json_field_names() {
        let id = uuid::Uuid::new_v4();
        let skill = AtsSkill::from(&fixtures::skill(id, "Go", SkillType::Backend, SkillLevel::Basic));
        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(value["type"], "Backend");

        let resume = AtsResume::from(&ResumeData::empty(fixtures::user("Ana Lima")));
        let value = serde_json::to_value(&resume).unwrap();
        assert!(value.get("fullName").is_some());
        assert!(value.get("professionalSummary").is_some());
    }
}
