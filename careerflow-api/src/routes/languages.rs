/// Language endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    models::language::{CreateLanguage, Language, UpdateLanguage},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{parse_field, parse_optional_field, ApiError, ApiResult},
    routes::{non_blank, owned, trimmed},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    pub level: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
    pub name: Option<String>,

    pub level: Option<String>,
}

pub async fn list_languages(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Language>>> {
    let languages = Language::list_by_user(&state.db, auth.user_id).await?;
    Ok(Json(languages))
}

pub async fn create_language(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateLanguageRequest>,
) -> ApiResult<(StatusCode, Json<Language>)> {
    req.validate()?;

    let data = CreateLanguage {
        user_id: auth.user_id,
        name: req.name,
        level: parse_field("level", &req.level)?,
    };
    let language = Language::create(&state.db, data).await?;

    Ok((StatusCode::CREATED, Json(language)))
}

pub async fn get_language(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Language>> {
    let found = Language::find_by_id(&state.db, id).await?;
    Ok(Json(owned(&auth, found, "Language")?))
}

pub async fn update_language(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLanguageRequest>,
) -> ApiResult<Json<Language>> {
    req.validate()?;
    owned(&auth, Language::find_by_id(&state.db, id).await?, "Language")?;

    let data = UpdateLanguage {
        name: non_blank(req.name).map(|n| n.trim().to_string()),
        level: parse_optional_field("level", req.level.as_deref())?,
    };
    let language = Language::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Language"))?;

    Ok(Json(language))
}

pub async fn delete_language(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(&auth, Language::find_by_id(&state.db, id).await?, "Language")?;

    Language::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
