/// Certificate endpoints
///
/// `GET /v1/certificates/expiring?days=N` lists certificates whose end date
/// falls within the next N days (30 when omitted), soonest first.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use careerflow_shared::{
    auth::middleware::AuthContext,
    models::certificate::{Certificate, CreateCertificate, UpdateCertificate},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{ensure_date_range, non_blank, owned, trimmed},
};

pub const DEFAULT_EXPIRING_DAYS: i64 = 30;
const MAX_EXPIRING_DAYS: i64 = 3650;

#[derive(Debug, Default, Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i64>,
}

impl ExpiringQuery {
    fn days(&self) -> ApiResult<i64> {
        match self.days {
            None => Ok(DEFAULT_EXPIRING_DAYS),
            Some(days) if (1..=MAX_EXPIRING_DAYS).contains(&days) => Ok(days),
            Some(_) => Err(ApiError::field(
                "days",
                format!("Days must be between 1 and {}", MAX_EXPIRING_DAYS),
            )),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCertificateRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub start_date: DateTime<Utc>,

    /// Absent when the certificate never expires
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Certificate path must be at most 500 characters"))]
    pub certificate_path: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCertificateRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Certificate path must be at most 500 characters"))]
    pub certificate_path: Option<String>,
}

pub async fn list_certificates(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Certificate>>> {
    let certificates = Certificate::list_by_user(&state.db, auth.user_id).await?;
    Ok(Json(certificates))
}

pub async fn expiring_certificates(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<ExpiringQuery>,
) -> ApiResult<Json<Vec<Certificate>>> {
    let days = query.days()?;
    let certificates =
        Certificate::list_expiring(&state.db, auth.user_id, Utc::now(), days).await?;
    Ok(Json(certificates))
}

pub async fn create_certificate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateCertificateRequest>,
) -> ApiResult<(StatusCode, Json<Certificate>)> {
    req.validate()?;
    ensure_date_range(Some(req.start_date), req.end_date)?;

    let certificate = Certificate::create(
        &state.db,
        CreateCertificate {
            user_id: auth.user_id,
            name: req.name,
            description: non_blank(req.description),
            start_date: req.start_date,
            end_date: req.end_date,
            certificate_path: non_blank(req.certificate_path),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(certificate)))
}

pub async fn get_certificate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Certificate>> {
    let found = Certificate::find_by_id(&state.db, id).await?;
    Ok(Json(owned(&auth, found, "Certificate")?))
}

pub async fn update_certificate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCertificateRequest>,
) -> ApiResult<Json<Certificate>> {
    req.validate()?;
    let current = owned(&auth, Certificate::find_by_id(&state.db, id).await?, "Certificate")?;

    ensure_date_range(
        Some(req.start_date.unwrap_or(current.start_date)),
        req.end_date.or(current.end_date),
    )?;

    let data = UpdateCertificate {
        name: non_blank(req.name).map(|n| n.trim().to_string()),
        description: non_blank(req.description),
        start_date: req.start_date,
        end_date: req.end_date,
        certificate_path: non_blank(req.certificate_path),
    };
    let certificate = Certificate::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Certificate"))?;

    Ok(Json(certificate))
}

pub async fn delete_certificate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    owned(&auth, Certificate::find_by_id(&state.db, id).await?, "Certificate")?;

    Certificate::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
