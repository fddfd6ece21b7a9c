/// ATS export endpoints
///
/// # Endpoints
///
/// - `GET /v1/ats/resume` - structured resume as JSON
/// - `GET /v1/ats/resume/text` - plain-text resume
/// - `GET /v1/ats/resume/download` - plain-text resume as an attachment
/// - `GET /v1/ats/resume/json` - structured resume as a JSON attachment
/// - `GET /v1/ats/keywords` - distinct keywords from the profile
/// - `GET /v1/ats/score` - 0-100 completeness score

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use careerflow_shared::{auth::middleware::AuthContext, resume::AtsResume};
use serde::Serialize;

use crate::{app::AppState, error::ApiResult};

pub const TEXT_FILENAME: &str = "resume-ats.txt";
pub const JSON_FILENAME: &str = "resume-ats.json";

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
}

fn attachment(filename: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn document(content_type: &'static str, body: impl Into<axum::body::Body>) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body.into(),
    )
        .into_response()
}

pub async fn resume(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<AtsResume>> {
    let resume = state.exporter().generate_resume(auth.user_id).await?;
    Ok(Json(resume))
}

pub async fn resume_text(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Response> {
    let text = state.exporter().generate_text(auth.user_id).await?;
    Ok(document(TEXT_CONTENT_TYPE, text))
}

pub async fn download_text(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Response> {
    let text = state.exporter().generate_text(auth.user_id).await?;

    let mut response = document(TEXT_CONTENT_TYPE, text);
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, attachment(TEXT_FILENAME));
    Ok(response)
}

pub async fn download_json(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Response> {
    let json = state.exporter().generate_json(auth.user_id).await?;

    let mut response = document(JSON_CONTENT_TYPE, json);
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, attachment(JSON_FILENAME));
    Ok(response)
}

pub async fn keywords(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<String>>> {
    let keywords = state.exporter().keywords(auth.user_id).await?;
    Ok(Json(keywords))
}

pub async fn score(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ScoreResponse>> {
    let score = state.exporter().score(auth.user_id).await?;
    Ok(Json(ScoreResponse { score }))
}
