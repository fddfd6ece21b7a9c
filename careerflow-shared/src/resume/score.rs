/// ATS completeness score

use chrono::{DateTime, Utc};

use super::data::ResumeData;
use crate::models::enums::SkillLevel;

pub const SUMMARY_POINTS: u32 = 10;
pub const SKILLS_POINTS: u32 = 20;
pub const EXPERIENCE_POINTS: u32 = 30;
pub const ACADEMIC_POINTS: u32 = 15;
pub const CERTIFICATE_POINTS: u32 = 15;
pub const LANGUAGE_POINTS: u32 = 10;
pub const CURRENT_EXPERIENCE_BONUS: u32 = 5;
pub const ADVANCED_SKILL_BONUS: u32 = 2;
pub const MAX_SCORE: u32 = 100;

/// Scores a profile between 0 and 100
///
/// Section points are awarded once per non-empty section; bonuses are
/// per current experience (as of `now`) and per advanced skill.
pub fn ats_score(data: &ResumeData, now: DateTime<Utc>) -> u8 {
    let sections = [
        (data.summary_text().is_some(), SUMMARY_POINTS),
        (!data.skills.is_empty(), SKILLS_POINTS),
        (!data.experiences.is_empty(), EXPERIENCE_POINTS),
        (!data.academics.is_empty(), ACADEMIC_POINTS),
        (!data.certificates.is_empty(), CERTIFICATE_POINTS),
        (!data.languages.is_empty(), LANGUAGE_POINTS),
    ];

    let base: u32 = sections
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();

    let current = data.experiences.iter().filter(|e| e.is_current_at(now)).count() as u32;
    let advanced = data
        .skills
        .iter()
        .filter(|s| s.level == SkillLevel::Advanced)
        .count() as u32;

    let score = base + current * CURRENT_EXPERIENCE_BONUS + advanced * ADVANCED_SKILL_BONUS;

    score.min(MAX_SCORE) as u8
}
