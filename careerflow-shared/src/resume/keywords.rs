/// Keyword extraction for ATS matching

use std::collections::HashSet;

use super::data::ResumeData;

/// Collects skill names, positions, companies, course names and
/// certificate names, in that order
///
/// Blank entries are dropped and duplicates keep their first occurrence.
/// Matching is exact: "Rust" and "rust" are distinct keywords.
pub fn extract_keywords(data: &ResumeData) -> Vec<String> {
    let candidates = data
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .chain(data.experiences.iter().map(|e| e.experience.position.as_str()))
        .chain(data.experiences.iter().map(|e| e.experience.company.as_str()))
        .chain(data.academics.iter().map(|a| a.course_name.as_str()))
        .chain(data.certificates.iter().map(|c| c.name.as_str()));

    let mut seen = HashSet::new();
    candidates
        .filter(|k| !k.trim().is_empty())
        .filter(|k| seen.insert(*k))
        .map(str::to_string)
        .collect()
}
