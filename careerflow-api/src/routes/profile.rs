/// Profile endpoints
///
/// # Endpoints
///
/// - `GET|PUT|DELETE /v1/profile/summary` - the single professional summary
/// - `GET|POST /v1/profile/social-medias` and `PUT|DELETE /v1/profile/social-medias/:id`
/// - `GET /v1/profile/resume` - every profile record in one document
/// - `GET /v1/profile/dashboard/stats` - counts, completeness, expirations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    dashboard::DashboardStats,
    models::{
        social_media::{CreateSocialMedia, SocialMedia, UpdateSocialMedia},
        summary::ProfessionalSummary,
    },
    resume::ResumeData,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{non_blank, owned, trimmed},
};

#[derive(Debug, Deserialize, Validate)]
pub struct SummaryRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 50, max = 2000, message = "Summary must be 50-2000 characters"))]
    pub summary: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSocialMediaRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Platform must be 1-100 characters"))]
    pub platform: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        url(message = "Invalid URL"),
        length(max = 500, message = "URL must be at most 500 characters")
    )]
    pub url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSocialMediaRequest {
    #[validate(length(max = 100, message = "Platform must be at most 100 characters"))]
    pub platform: Option<String>,

    #[validate(
        url(message = "Invalid URL"),
        length(max = 500, message = "URL must be at most 500 characters")
    )]
    pub url: Option<String>,
}

pub async fn get_summary(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ProfessionalSummary>> {
    let summary = ProfessionalSummary::find_by_user(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Summary"))?;

    Ok(Json(summary))
}

/// Creates or replaces the caller's summary
pub async fn save_summary(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SummaryRequest>,
) -> ApiResult<Json<ProfessionalSummary>> {
    req.validate()?;

    let summary = ProfessionalSummary::upsert(&state.db, auth.user_id, &req.summary).await?;
    Ok(Json(summary))
}

pub async fn delete_summary(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    if !ProfessionalSummary::delete_by_user(&state.db, auth.user_id).await? {
        return Err(ApiError::not_found("Summary"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_social_medias(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<SocialMedia>>> {
    let links = SocialMedia::list_by_user(&state.db, auth.user_id).await?;
    Ok(Json(links))
}

/// Adds a social link
///
/// # Errors
///
/// - `409 Conflict`: the caller already has a link for this platform
pub async fn create_social_media(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateSocialMediaRequest>,
) -> ApiResult<(StatusCode, Json<SocialMedia>)> {
    req.validate()?;

    let link = SocialMedia::create(
        &state.db,
        CreateSocialMedia {
            user_id: auth.user_id,
            platform: req.platform,
            url: req.url,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_social_media(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSocialMediaRequest>,
) -> ApiResult<Json<SocialMedia>> {
    req.validate()?;
    owned(&auth, SocialMedia::find_by_id(&state.db, id).await?, "Social media")?;

    let link = SocialMedia::update(
        &state.db,
        id,
        UpdateSocialMedia {
            platform: non_blank(req.platform).map(|p| p.trim().to_string()),
            url: non_blank(req.url),
        },
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Social media"))?;

    Ok(Json(link))
}

pub async fn delete_social_media(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(&auth, SocialMedia::find_by_id(&state.db, id).await?, "Social media")?;

    SocialMedia::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The caller's aggregated profile, in export order
pub async fn resume_data(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ResumeData>> {
    let data = state.exporter().resume_data(auth.user_id).await?;
    Ok(Json(data))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<DashboardStats>> {
    let data = state.exporter().resume_data(auth.user_id).await?;
    Ok(Json(DashboardStats::compute(&data, Utc::now())))
}
