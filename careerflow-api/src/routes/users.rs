/// Current user endpoints
///
/// - `GET /v1/users/me`
/// - `PUT /v1/users/me` - partial update; blank strings are ignored
/// - `DELETE /v1/users/me` - removes the account and every profile record

use axum::{extract::State, http::StatusCode, Extension, Json};
use careerflow_shared::{
    auth::middleware::AuthContext,
    models::user::{UpdateUser, User},
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::non_blank,
};

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "State must be a 2-letter code"))]
    pub state: Option<String>,

    #[validate(length(max = 500, message = "Photo path must be at most 500 characters"))]
    pub photo_path: Option<String>,
}

impl UpdateUserRequest {
    fn into_update(self) -> UpdateUser {
        UpdateUser {
            name: non_blank(self.name).map(|n| n.trim().to_string()),
            phone: non_blank(self.phone),
            city: non_blank(self.city),
            state: non_blank(self.state).map(|s| s.to_uppercase()),
            photo_path: non_blank(self.photo_path),
        }
    }
}

pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(user))
}

pub async fn update_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    req.validate()?;

    let user = User::update(&state.db, auth.user_id, req.into_update())
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(user))
}

pub async fn delete_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    if !User::delete(&state.db, auth.user_id).await? {
        return Err(ApiError::not_found("User"));
    }

    info!(user_id = %auth.user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
