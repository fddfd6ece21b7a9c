/// Skill endpoints
///
/// Type and level travel as strings and accept either the stored code
/// (`CLOUD_DEVOPS`) or the display label (`Cloud & DevOps`).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    dashboard::{skill_distribution as distribution_of, SkillDistribution},
    models::skill::{CreateSkill, Skill, SkillFilter, UpdateSkill},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{parse_field, parse_optional_field, ApiError, ApiResult},
    routes::{non_blank, owned, trimmed},
};

#[derive(Debug, Default, Deserialize)]
pub struct SkillQuery {
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    pub level: Option<String>,
}

impl SkillQuery {
    fn into_filter(self) -> ApiResult<SkillFilter> {
        Ok(SkillFilter {
            skill_type: parse_optional_field("type", self.skill_type.as_deref())?,
            level: parse_optional_field("level", self.level.as_deref())?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub skill_type: String,

    pub level: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub skill_type: Option<String>,

    pub level: Option<String>,
}

pub async fn list_skills(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<SkillQuery>,
) -> ApiResult<Json<Vec<Skill>>> {
    let filter = query.into_filter()?;
    let skills = Skill::list_by_user(&state.db, auth.user_id, filter).await?;
    Ok(Json(skills))
}

pub async fn create_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateSkillRequest>,
) -> ApiResult<(StatusCode, Json<Skill>)> {
    req.validate()?;

    let data = CreateSkill {
        user_id: auth.user_id,
        name: req.name,
        skill_type: parse_field("type", &req.skill_type)?,
        level: parse_field("level", &req.level)?,
    };
    let skill = Skill::create(&state.db, data).await?;

    Ok((StatusCode::CREATED, Json(skill)))
}

pub async fn get_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Skill>> {
    let skill = owned(&auth, Skill::find_by_id(&state.db, id).await?, "Skill")?;
    Ok(Json(skill))
}

pub async fn update_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSkillRequest>,
) -> ApiResult<Json<Skill>> {
    req.validate()?;
    owned(&auth, Skill::find_by_id(&state.db, id).await?, "Skill")?;

    let data = UpdateSkill {
        name: non_blank(req.name).map(|n| n.trim().to_string()),
        skill_type: parse_optional_field("type", req.skill_type.as_deref())?,
        level: parse_optional_field("level", req.level.as_deref())?,
    };
    let skill = Skill::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Skill"))?;

    Ok(Json(skill))
}

/// Deletes a skill and its experience links
pub async fn delete_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(&auth, Skill::find_by_id(&state.db, id).await?, "Skill")?;

    Skill::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Skill counts per type, largest first
pub async fn skill_distribution(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<SkillDistribution>>> {
    let skills = Skill::list_by_user(&state.db, auth.user_id, SkillFilter::default()).await?;
    Ok(Json(distribution_of(&skills)))
}
