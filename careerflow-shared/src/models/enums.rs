/// Enumerations shared by the profile entities
///
/// Every enum is stored as a Postgres enum type and serialized by its stable
/// SCREAMING_SNAKE_CASE code. Each variant also has a human-readable label
/// (used in exported resumes) and a numeric rank (used for ordering, higher
/// is stronger).
///
/// # Schema
///
/// ```sql
/// CREATE TYPE skill_type AS ENUM (
///     'BACKEND', 'FRONTEND', 'DATABASE', 'CLOUD_DEVOPS', 'ARCHITECTURE', 'TOOLS'
/// );
/// CREATE TYPE skill_level AS ENUM ('BASIC', 'INTERMEDIATE', 'ADVANCED');
/// CREATE TYPE education_level AS ENUM (
///     'GRADUATION', 'POSTGRADUATION', 'MBA', 'MASTERS', 'DOCTORATE', 'TECHNICIAN'
/// );
/// CREATE TYPE language_level AS ENUM ('BASIC', 'INTERMEDIATE', 'ADVANCED', 'FLUENT');
/// ```
///
/// # Parsing
///
/// Request payloads carry enum values as plain strings. `FromStr` accepts the
/// code or the label, case-insensitively, and rejects anything else:
///
/// ```
/// use careerflow_shared::models::enums::SkillLevel;
///
/// assert_eq!("advanced".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
/// assert!("expert".parse::<SkillLevel>().is_err());
/// ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed (e.g. "skill level")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Common surface of the profile enumerations
pub trait ProfileEnum: Sized + Copy + 'static {
    /// Human-readable name of the enumeration, used in error messages
    const KIND: &'static str;

    /// All variants in declaration (and rank) order
    const ALL: &'static [Self];

    /// Stable code, identical to the stored and serialized value
    fn code(&self) -> &'static str;

    /// Display label used in exported documents
    fn label(&self) -> &'static str;

    /// Ordering rank, 1-based, higher is stronger
    fn rank(&self) -> u8;
}

fn parse_profile_enum<T: ProfileEnum>(input: &str) -> Result<T, ParseEnumError> {
    let needle = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|variant| {
            variant.code().eq_ignore_ascii_case(needle) || variant.label().eq_ignore_ascii_case(needle)
        })
        .ok_or_else(|| ParseEnumError {
            kind: T::KIND,
            value: input.to_string(),
        })
}

/// Technical area a skill belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillType {
    Backend,
    Frontend,
    Database,
    CloudDevops,
    Architecture,
    Tools,
}

impl ProfileEnum for SkillType {
    const KIND: &'static str = "skill type";
    const ALL: &'static [Self] = &[
        SkillType::Backend,
        SkillType::Frontend,
        SkillType::Database,
        SkillType::CloudDevops,
        SkillType::Architecture,
        SkillType::Tools,
    ];

    fn code(&self) -> &'static str {
        match self {
            SkillType::Backend => "BACKEND",
            SkillType::Frontend => "FRONTEND",
            SkillType::Database => "DATABASE",
            SkillType::CloudDevops => "CLOUD_DEVOPS",
            SkillType::Architecture => "ARCHITECTURE",
            SkillType::Tools => "TOOLS",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SkillType::Backend => "Backend",
            SkillType::Frontend => "Frontend",
            SkillType::Database => "Database",
            SkillType::CloudDevops => "Cloud & DevOps",
            SkillType::Architecture => "Architecture & Patterns",
            SkillType::Tools => "Tools & Other Technologies",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SkillType::Backend => 1,
            SkillType::Frontend => 2,
            SkillType::Database => 3,
            SkillType::CloudDevops => 4,
            SkillType::Architecture => 5,
            SkillType::Tools => 6,
        }
    }
}

/// Proficiency in a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl ProfileEnum for SkillLevel {
    const KIND: &'static str = "skill level";
    const ALL: &'static [Self] = &[SkillLevel::Basic, SkillLevel::Intermediate, SkillLevel::Advanced];

    fn code(&self) -> &'static str {
        match self {
            SkillLevel::Basic => "BASIC",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SkillLevel::Basic => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
        }
    }
}

/// Degree level of an academic background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "education_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    Graduation,
    Postgraduation,
    Mba,
    Masters,
    Doctorate,
    Technician,
}

impl ProfileEnum for EducationLevel {
    const KIND: &'static str = "education level";
    const ALL: &'static [Self] = &[
        EducationLevel::Graduation,
        EducationLevel::Postgraduation,
        EducationLevel::Mba,
        EducationLevel::Masters,
        EducationLevel::Doctorate,
        EducationLevel::Technician,
    ];

    fn code(&self) -> &'static str {
        match self {
            EducationLevel::Graduation => "GRADUATION",
            EducationLevel::Postgraduation => "POSTGRADUATION",
            EducationLevel::Mba => "MBA",
            EducationLevel::Masters => "MASTERS",
            EducationLevel::Doctorate => "DOCTORATE",
            EducationLevel::Technician => "TECHNICIAN",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EducationLevel::Graduation => "Graduation",
            EducationLevel::Postgraduation => "Postgraduate",
            EducationLevel::Mba => "MBA",
            EducationLevel::Masters => "Master's",
            EducationLevel::Doctorate => "Doctorate",
            EducationLevel::Technician => "Technician",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            EducationLevel::Graduation => 1,
            EducationLevel::Postgraduation => 2,
            EducationLevel::Mba => 3,
            EducationLevel::Masters => 4,
            EducationLevel::Doctorate => 5,
            EducationLevel::Technician => 6,
        }
    }
}

/// Proficiency in a spoken language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "language_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LanguageLevel {
    Basic,
    Intermediate,
    Advanced,
    Fluent,
}

impl ProfileEnum for LanguageLevel {
    const KIND: &'static str = "language level";
    const ALL: &'static [Self] = &[
        LanguageLevel::Basic,
        LanguageLevel::Intermediate,
        LanguageLevel::Advanced,
        LanguageLevel::Fluent,
    ];

    fn code(&self) -> &'static str {
        match self {
            LanguageLevel::Basic => "BASIC",
            LanguageLevel::Intermediate => "INTERMEDIATE",
            LanguageLevel::Advanced => "ADVANCED",
            LanguageLevel::Fluent => "FLUENT",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LanguageLevel::Basic => "Basic",
            LanguageLevel::Intermediate => "Intermediate",
            LanguageLevel::Advanced => "Advanced",
            LanguageLevel::Fluent => "Fluent/Native",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            LanguageLevel::Basic => 1,
            LanguageLevel::Intermediate => 2,
            LanguageLevel::Advanced => 3,
            LanguageLevel::Fluent => 4,
        }
    }
}

impl FromStr for SkillType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_profile_enum(s)
    }
}

impl FromStr for SkillLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_profile_enum(s)
    }
}

impl FromStr for EducationLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_profile_enum(s)
    }
}

impl FromStr for LanguageLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_profile_enum(s)
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
