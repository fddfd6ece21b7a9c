/// Academic background endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    models::academic::{AcademicBackground, CreateAcademic, UpdateAcademic},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{parse_field, parse_optional_field, ApiError, ApiResult},
    routes::{ensure_date_range, non_blank, owned, trimmed},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAcademicRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Institution must be 1-200 characters"))]
    pub institution: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Course name must be 1-200 characters"))]
    pub course_name: String,

    /// Education level code or label
    pub level: String,

    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Diploma path must be at most 500 characters"))]
    pub diploma_path: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAcademicRequest {
    #[validate(length(max = 200, message = "Institution must be at most 200 characters"))]
    pub institution: Option<String>,

    #[validate(length(max = 200, message = "Course name must be at most 200 characters"))]
    pub course_name: Option<String>,

    pub level: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Diploma path must be at most 500 characters"))]
    pub diploma_path: Option<String>,
}

pub async fn list_academics(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<AcademicBackground>>> {
    let academics = AcademicBackground::list_by_user(&state.db, auth.user_id).await?;
    Ok(Json(academics))
}

pub async fn create_academic(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateAcademicRequest>,
) -> ApiResult<(StatusCode, Json<AcademicBackground>)> {
    req.validate()?;
    ensure_date_range(Some(req.start_date), req.end_date)?;

    let academic = AcademicBackground::create(
        &state.db,
        CreateAcademic {
            user_id: auth.user_id,
            institution: req.institution,
            course_name: req.course_name,
            level: parse_field("level", &req.level)?,
            start_date: req.start_date,
            end_date: req.end_date,
            diploma_path: non_blank(req.diploma_path),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(academic)))
}

pub async fn get_academic(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AcademicBackground>> {
    let found = AcademicBackground::find_by_id(&state.db, id).await?;
    Ok(Json(owned(&auth, found, "Academic background")?))
}

pub async fn update_academic(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAcademicRequest>,
) -> ApiResult<Json<AcademicBackground>> {
    req.validate()?;
    let current = owned(
        &auth,
        AcademicBackground::find_by_id(&state.db, id).await?,
        "Academic background",
    )?;

    ensure_date_range(
        Some(req.start_date.unwrap_or(current.start_date)),
        req.end_date.or(current.end_date),
    )?;

    let data = UpdateAcademic {
        institution: non_blank(req.institution).map(|i| i.trim().to_string()),
        course_name: non_blank(req.course_name).map(|c| c.trim().to_string()),
        level: parse_optional_field("level", req.level.as_deref())?,
        start_date: req.start_date,
        end_date: req.end_date,
        diploma_path: non_blank(req.diploma_path),
    };
    let academic = AcademicBackground::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Academic background"))?;

    Ok(Json(academic))
}

pub async fn delete_academic(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(
        &auth,
        AcademicBackground::find_by_id(&state.db, id).await?,
        "Academic background",
    )?;

    AcademicBackground::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(institution: &str, course_name: &str) -> CreateAcademicRequest {
        serde_json::from_value(serde_json::json!({
            "institution": institution,
            "course_name": course_name,
            "level": "BACHELOR",
            "start_date": "2016-02-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_names_are_trimmed() {
        let req = create_request("  UFPE ", "Computer Science");
        assert_eq!(req.institution, "UFPE");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert!(create_request("   ", "Computer Science").validate().is_err());
        assert!(create_request("UFPE", "  ").validate().is_err());
    }
}
