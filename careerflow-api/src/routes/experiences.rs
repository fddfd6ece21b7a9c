/// Professional experience endpoints
///
/// Every response carries the experience together with its linked skills.
/// `skill_ids` on create and update replaces the whole link set; ids of
/// skills the caller does not own are skipped.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    models::{
        experience::{
            CreateExperience, ExperienceWithSkills, ProfessionalExperience, UpdateExperience,
        },
        skill::Skill,
    },
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{ensure_date_range, non_blank, owned, trimmed},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Company must be 1-100 characters"))]
    pub company: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Position must be 1-100 characters"))]
    pub position: String,

    pub start_date: DateTime<Utc>,

    /// Absent for a current position
    pub end_date: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Responsibilities must be 1-2000 characters"
    ))]
    pub responsibilities: String,

    #[serde(default = "default_is_paid")]
    pub is_paid: bool,

    #[serde(default)]
    pub skill_ids: Vec<Uuid>,
}

fn default_is_paid() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,

    #[validate(length(max = 100, message = "Position must be at most 100 characters"))]
    pub position: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 2000, message = "Responsibilities must be at most 2000 characters"))]
    pub responsibilities: Option<String>,

    pub is_paid: Option<bool>,

    /// When present, replaces the linked skills
    pub skill_ids: Option<Vec<Uuid>>,
}

async fn with_skills(state: &AppState, id: Uuid) -> ApiResult<ExperienceWithSkills> {
    ProfessionalExperience::find_with_skills(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Experience"))
}

pub async fn list_experiences(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<ExperienceWithSkills>>> {
    let experiences = ProfessionalExperience::list_with_skills(&state.db, auth.user_id).await?;
    Ok(Json(experiences))
}

pub async fn create_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateExperienceRequest>,
) -> ApiResult<(StatusCode, Json<ExperienceWithSkills>)> {
    req.validate()?;
    ensure_date_range(Some(req.start_date), req.end_date)?;

    let (experience, linked) = ProfessionalExperience::create_with_skills(
        &state.db,
        CreateExperience {
            user_id: auth.user_id,
            company: req.company,
            position: req.position,
            start_date: req.start_date,
            end_date: req.end_date,
            responsibilities: req.responsibilities,
            is_paid: req.is_paid,
        },
        &req.skill_ids,
    )
    .await?;
    debug!(experience_id = %experience.id, linked, "Experience created");

    Ok((StatusCode::CREATED, Json(with_skills(&state, experience.id).await?)))
}

pub async fn get_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ExperienceWithSkills>> {
    let found = ProfessionalExperience::find_with_skills(&state.db, id).await?;
    Ok(Json(owned(&auth, found, "Experience")?))
}

/// Partial update
///
/// The date range is checked against the merged result, so moving only the
/// start date past a stored end date is rejected.
pub async fn update_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExperienceRequest>,
) -> ApiResult<Json<ExperienceWithSkills>> {
    req.validate()?;
    let current = owned(
        &auth,
        ProfessionalExperience::find_by_id(&state.db, id).await?,
        "Experience",
    )?;

    ensure_date_range(
        Some(req.start_date.unwrap_or(current.start_date)),
        req.end_date.or(current.end_date),
    )?;

    let updated = ProfessionalExperience::update(
        &state.db,
        id,
        UpdateExperience {
            company: non_blank(req.company).map(|c| c.trim().to_string()),
            position: non_blank(req.position).map(|p| p.trim().to_string()),
            start_date: req.start_date,
            end_date: req.end_date,
            responsibilities: non_blank(req.responsibilities),
            is_paid: req.is_paid,
        },
    )
    .await?;
    if updated.is_none() {
        return Err(ApiError::not_found("Experience"));
    }

    if let Some(skill_ids) = req.skill_ids {
        ProfessionalExperience::replace_skills(&state.db, id, auth.user_id, &skill_ids).await?;
    }

    Ok(Json(with_skills(&state, id).await?))
}

pub async fn delete_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(
        &auth,
        ProfessionalExperience::find_by_id(&state.db, id).await?,
        "Experience",
    )?;

    ProfessionalExperience::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Links one of the caller's skills to one of the caller's experiences
///
/// Linking twice is not an error.
pub async fn link_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path((id, skill_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ExperienceWithSkills>> {
    owned(
        &auth,
        ProfessionalExperience::find_by_id(&state.db, id).await?,
        "Experience",
    )?;
    owned(&auth, Skill::find_by_id(&state.db, skill_id).await?, "Skill")?;

    ProfessionalExperience::link_skill(&state.db, id, skill_id).await?;

    Ok(Json(with_skills(&state, id).await?))
}

pub async fn unlink_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path((id, skill_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    owned(
        &auth,
        ProfessionalExperience::find_by_id(&state.db, id).await?,
        "Experience",
    )?;

    if !ProfessionalExperience::unlink_skill(&state.db, id, skill_id).await? {
        return Err(ApiError::not_found("Skill link"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateExperienceRequest = serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "position": "Backend Developer",
            "start_date": "2021-03-01T00:00:00Z",
            "responsibilities": "Built APIs"
        }))
        .unwrap();

        assert!(req.is_paid);
        assert!(req.skill_ids.is_empty());
        assert!(req.end_date.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_responsibilities_limit() {
        let req: CreateExperienceRequest = serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "position": "Backend Developer",
            "start_date": "2021-03-01T00:00:00Z",
            "responsibilities": "x".repeat(2001)
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_company_and_position_are_rejected() {
        let req: CreateExperienceRequest = serde_json::from_value(serde_json::json!({
            "company": "   ",
            "position": "\n",
            "start_date": "2021-03-01T00:00:00Z",
            "responsibilities": "Built APIs"
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("company"));
        assert!(fields.contains_key("position"));
    }

    #[test]
    fn test_update_request_distinguishes_absent_skill_ids() {
        let keep: UpdateExperienceRequest =
            serde_json::from_value(serde_json::json!({ "company": "Globex" })).unwrap();
        assert!(keep.skill_ids.is_none());

        let clear: UpdateExperienceRequest =
            serde_json::from_value(serde_json::json!({ "skill_ids": [] })).unwrap();
        assert_eq!(clear.skill_ids, Some(vec![]));
    }
}
