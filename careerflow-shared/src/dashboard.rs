/// Dashboard statistics derived from a user's profile
///
/// Everything here is computed from an already-loaded [`ResumeData`], so
/// the dashboard costs one aggregate load and no extra queries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    enums::{ProfileEnum, SkillType},
    skill::Skill,
};
use crate::resume::ResumeData;

/// Maximum number of upcoming expirations reported
pub const UPCOMING_EXPIRATIONS_LIMIT: usize = 5;

/// Number of profile fields weighed by [`profile_completeness`]
const COMPLETENESS_FIELDS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_skills: usize,
    pub total_experiences: usize,
    pub total_certificates: usize,
    pub total_languages: usize,
    /// Percentage of filled profile fields, 0 to 100
    pub profile_completeness: u8,
    pub skill_distribution: Vec<SkillDistribution>,
    pub upcoming_expirations: Vec<UpcomingExpiration>,
}

/// Share of skills in one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDistribution {
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub label: &'static str,
    pub count: usize,
    /// Rounded share of all skills, 0 to 100
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingExpiration {
    pub name: String,
    /// Kind of record; always "certificate"
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub expiration_date: DateTime<Utc>,
    pub days_until_expiration: i64,
}

impl DashboardStats {
    pub fn compute(data: &ResumeData, now: DateTime<Utc>) -> Self {
        Self {
            total_skills: data.skills.len(),
            total_experiences: data.experiences.len(),
            total_certificates: data.certificates.len(),
            total_languages: data.languages.len(),
            profile_completeness: profile_completeness(data),
            skill_distribution: skill_distribution(&data.skills),
            upcoming_expirations: upcoming_expirations(data, now),
        }
    }
}

fn rounded_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / total as f64).round() as u8
}

/// Counts skills per type, most common first
///
/// Types without skills are left out. Ties keep the order of first
/// appearance in `skills`.
pub fn skill_distribution(skills: &[Skill]) -> Vec<SkillDistribution> {
    let mut counts: Vec<(SkillType, usize)> = Vec::new();
    for skill in skills {
        match counts.iter_mut().find(|(t, _)| *t == skill.skill_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((skill.skill_type, 1)),
        }
    }

    // Stable, so ties stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(skill_type, count)| SkillDistribution {
            skill_type,
            label: skill_type.label(),
            count,
            percentage: rounded_percentage(count, skills.len()),
        })
        .collect()
}

/// Certificates expiring after `now`, soonest first, at most
/// [`UPCOMING_EXPIRATIONS_LIMIT`]
pub fn upcoming_expirations(data: &ResumeData, now: DateTime<Utc>) -> Vec<UpcomingExpiration> {
    let mut upcoming: Vec<UpcomingExpiration> = data
        .certificates
        .iter()
        .filter_map(|cert| {
            let end = cert.end_date.filter(|end| *end > now)?;
            Some(UpcomingExpiration {
                name: cert.name.clone(),
                kind: "certificate",
                expiration_date: end,
                days_until_expiration: (end - now).num_days(),
            })
        })
        .collect();

    upcoming.sort_by_key(|u| u.expiration_date);
    upcoming.truncate(UPCOMING_EXPIRATIONS_LIMIT);
    upcoming
}

/// Rounded percentage of filled fields among name, email, city, state,
/// summary, skills, experiences, academics, certificates and languages
pub fn profile_completeness(data: &ResumeData) -> u8 {
    let filled_text = |value: Option<&str>| value.is_some_and(|v| !v.trim().is_empty());
    let user = &data.user;

    let fields = [
        filled_text(Some(user.name.as_str())),
        filled_text(Some(user.email.as_str())),
        filled_text(user.city.as_deref()),
        filled_text(user.state.as_deref()),
        data.summary_text().is_some(),
        !data.skills.is_empty(),
        !data.experiences.is_empty(),
        !data.academics.is_empty(),
        !data.certificates.is_empty(),
        !data.languages.is_empty(),
    ];

    let filled = fields.iter().filter(|f| **f).count();
    rounded_percentage(filled, COMPLETENESS_FIELDS as usize)
}
