/// Plain-text rendering of an [`AtsResume`]
///
/// Sections appear in a fixed order and are skipped when empty; the
/// contact block is always written. Output is deterministic for a given
/// resume and generation time.

use std::fmt;

use chrono::{DateTime, Utc};

use super::ats::AtsResume;

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;
const BULLET: &str = "  •";

/// [`fmt::Display`] adapter writing the text resume
pub struct PlainText<'a> {
    resume: &'a AtsResume,
    generated_at: DateTime<Utc>,
}

impl<'a> PlainText<'a> {
    pub fn new(resume: &'a AtsResume, generated_at: DateTime<Utc>) -> Self {
        Self {
            resume,
            generated_at,
        }
    }
}

/// Renders `resume` as plain text stamped with `generated_at`
pub fn render_text(resume: &AtsResume, generated_at: DateTime<Utc>) -> String {
    PlainText::new(resume, generated_at).to_string()
}

fn rule(f: &mut fmt::Formatter<'_>, ch: char, width: usize) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(width))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    rule(f, '-', SECTION_RULE_WIDTH)
}

impl fmt::Display for PlainText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.resume;

        rule(f, '=', RULE_WIDTH)?;
        writeln!(f, "ATS RESUME - {}", r.full_name.to_uppercase())?;
        rule(f, '=', RULE_WIDTH)?;
        writeln!(f)?;

        section(f, "CONTACT INFORMATION")?;
        writeln!(f, "Name: {}", r.full_name)?;
        writeln!(f, "Email: {}", r.email)?;
        if !r.phone.is_empty() {
            writeln!(f, "Phone: {}", r.phone)?;
        }
        if !r.location.is_empty() {
            writeln!(f, "Location: {}", r.location)?;
        }
        writeln!(f)?;

        if !r.professional_summary.is_empty() {
            section(f, "PROFESSIONAL SUMMARY")?;
            writeln!(f, "{}", r.professional_summary)?;
            writeln!(f)?;
        }

        if !r.experiences.is_empty() {
            section(f, "PROFESSIONAL EXPERIENCE")?;
            for exp in &r.experiences {
                writeln!(f, "{} | {}", exp.position, exp.company)?;
                writeln!(f, "Period: {}", exp.period)?;

                if !exp.responsibilities.is_empty() {
                    writeln!(f, "Responsibilities:")?;
                    for item in &exp.responsibilities {
                        writeln!(f, "{} {}", BULLET, item)?;
                    }
                }

                if !exp.skills_used.is_empty() {
                    writeln!(f, "Skills used: {}", exp.skills_used.join(", "))?;
                }
                writeln!(f)?;
            }
        }

        if !r.skills.is_empty() {
            section(f, "SKILLS")?;

            // Groups keep the order in which each type first appears
            let mut groups: Vec<&str> = Vec::new();
            for skill in &r.skills {
                if !groups.contains(&skill.skill_type.as_str()) {
                    groups.push(&skill.skill_type);
                }
            }

            for group in groups {
                writeln!(f, "{}:", group)?;
                for skill in r.skills.iter().filter(|s| s.skill_type == group) {
                    writeln!(f, "{} {} ({})", BULLET, skill.name, skill.level)?;
                }
            }
            writeln!(f)?;
        }

        if !r.education.is_empty() {
            section(f, "EDUCATION")?;
            for edu in &r.education {
                writeln!(f, "{}", edu.degree)?;
                writeln!(f, "{} | {}", edu.institution, edu.period)?;
                writeln!(f)?;
            }
        }

        if !r.certifications.is_empty() {
            section(f, "CERTIFICATIONS")?;
            for cert in &r.certifications {
                writeln!(f, "{}", cert.name)?;
                writeln!(f, "Issued by: {} | Validity: {}", cert.issuer, cert.validity)?;
                writeln!(f)?;
            }
        }

        if !r.languages.is_empty() {
            section(f, "LANGUAGES")?;
            for lang in &r.languages {
                writeln!(f, "{}: {}", lang.language, lang.proficiency)?;
            }
            writeln!(f)?;
        }

        rule(f, '=', RULE_WIDTH)?;
        writeln!(f, "Resume generated by CareerFlow - Optimized for ATS")?;
        writeln!(f, "Generated at: {}", self.generated_at.format("%d/%m/%Y %H:%M"))
    }
}
