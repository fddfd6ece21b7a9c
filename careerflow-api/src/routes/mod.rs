/// API route handlers
///
/// Handlers are organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration, login, token refresh, email availability
/// - `users`: the authenticated user's account
/// - `profile`: summary, social links, raw resume data, dashboard
/// - `skills`, `experiences`, `academics`, `certificates`, `languages`: profile records
/// - `ats`: ATS resume exports, keywords and score
///
/// Every handler behind authentication loads records by id, answers 404
/// when absent and 403 when owned by someone else.

pub mod academics;
pub mod ats;
pub mod auth;
pub mod certificates;
pub mod experiences;
pub mod health;
pub mod languages;
pub mod profile;
pub mod skills;
pub mod users;

use careerflow_shared::auth::{
    authorization::{require_owner, OwnedResource},
    middleware::AuthContext,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, ApiResult};

/// Unwraps a looked-up record and checks the caller owns it
pub(crate) fn owned<R: OwnedResource>(
    auth: &AuthContext,
    found: Option<R>,
    what: &str,
) -> ApiResult<R> {
    let resource = found.ok_or_else(|| ApiError::not_found(what))?;
    require_owner(auth, &resource)?;
    Ok(resource)
}

/// Rejects an end date earlier than the start date
pub(crate) fn ensure_date_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> ApiResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ApiError::field(
            "end_date",
            "End date must be on or after the start date",
        )),
        _ => Ok(()),
    }
}

/// Deserializes a required string with surrounding whitespace removed
///
/// Length rules then apply to the trimmed value, so `"   "` fails `min = 1`.
pub(crate) fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Drops blank strings so partial updates leave the stored value alone
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
