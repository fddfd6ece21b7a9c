/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /v1/auth/register` - Register new user
/// - `POST /v1/auth/login` - Login and get tokens
/// - `POST /v1/auth/refresh` - Exchange a refresh token for an access token
/// - `GET /v1/auth/check-email?email=` - Whether an email is already registered

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use careerflow_shared::{
    auth::{
        jwt::AccessToken,
        password::{hash_password, validate_password_strength, verify_password},
    },
    models::user::{CreateUser, User},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{non_blank, trimmed},
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,

    /// Checked against the password policy after schema validation
    pub password: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "State must be a 2-letter code"))]
    pub state: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// Expiration of the access token
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CheckEmailResponse {
    pub email: String,
    pub exists: bool,
}

fn auth_response(state: &AppState, user: User) -> ApiResult<AuthResponse> {
    let tokens = state.jwt.issue_pair(user.id)?;

    Ok(AuthResponse {
        user,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_at: tokens.expires_at,
    })
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/register
/// Content-Type: application/json
///
/// {
///   "name": "Ana Lima",
///   "email": "ana@example.com",
///   "password": "S3cure!pass",
///   "city": "Recife",
///   "state": "PE"
/// }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Email already exists
/// - `422 Unprocessable Entity`: Validation or password policy failed
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;
    validate_password_strength(&req.password)?;

    let email = req.email.trim().to_string();
    if User::email_exists(&state.db, &email).await? {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let password_hash = hash_password(&req.password)?;

    // A concurrent registration can still hit the unique index; that maps to 409 too
    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email,
            password_hash,
            phone: non_blank(req.phone),
            city: non_blank(req.city),
            state: non_blank(req.state).map(|s| s.to_uppercase()),
        },
    )
    .await?;

    info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

/// Login endpoint
///
/// Unknown emails and wrong passwords produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(&req.password, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    info!(user_id = %user.id, "User logged in");

    Ok(Json(auth_response(&state, user)?))
}

/// Token refresh endpoint
///
/// # Errors
///
/// - `401 Unauthorized`: Invalid, expired or non-refresh token
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<AccessToken>> {
    let token = state.jwt.refresh(&req.refresh_token)?;
    Ok(Json(token))
}

/// Email availability check
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<CheckEmailQuery>,
) -> ApiResult<Json<CheckEmailResponse>> {
    let exists = User::email_exists(&state.db, &query.email).await?;

    Ok(Json(CheckEmailResponse {
        email: query.email,
        exists,
    }))
}
