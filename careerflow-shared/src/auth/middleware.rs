/// Bearer-token authentication middleware for Axum
///
/// The middleware reads `Authorization: Bearer <token>`, validates it as an
/// access token and inserts an [`AuthContext`] into the request extensions.
/// Requests without a valid token are rejected with 401 before reaching the
/// handler.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Extension, Router};
/// use careerflow_shared::auth::jwt::JwtKeys;
/// use careerflow_shared::auth::middleware::{jwt_auth_middleware, AuthContext};
/// use chrono::Duration;
///
/// async fn whoami(Extension(auth): Extension<AuthContext>) -> String {
///     auth.user_id.to_string()
/// }
///
/// let keys = JwtKeys::new("a-secret-that-is-at-least-32-bytes!!", Duration::hours(24));
/// let app: Router = Router::new()
///     .route("/whoami", get(whoami))
///     .layer(middleware::from_fn(move |req, next| {
///         jwt_auth_middleware(keys.clone(), req, next)
///     }));
/// ```

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::jwt::{JwtError, JwtKeys};

/// Identity of the caller, available to handlers via `Extension<AuthContext>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Error type for authentication middleware
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Header present but not a Bearer token
    InvalidFormat,

    /// Token validation failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingCredentials => "Missing credentials".to_string(),
            AuthError::InvalidFormat => "Expected Bearer token".to_string(),
            AuthError::InvalidToken(msg) => msg,
        };

        let body = json!({
            "error": "unauthorized",
            "message": message,
        });

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Extracts the token from a `Bearer <token>` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// JWT authentication middleware
///
/// Use with `axum::middleware::from_fn`, capturing the keys in a closure.
pub async fn jwt_auth_middleware(
    keys: JwtKeys,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = bearer_token(auth_header).ok_or(AuthError::InvalidFormat)?;

    let claims = keys.validate_access(token).map_err(|e| match e {
        JwtError::Expired => AuthError::InvalidToken("Token expired".to_string()),
        JwtError::InvalidIssuer => AuthError::InvalidToken("Invalid issuer".to_string()),
        JwtError::WrongTokenType { .. } => {
            AuthError::InvalidToken("Access token required".to_string())
        }
        _ => AuthError::InvalidToken("Invalid token".to_string()),
    })?;

    tracing::debug!(user_id = %claims.sub, "Request authenticated");

    req.extensions_mut().insert(AuthContext::new(claims.sub));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Extension, Router};
    use chrono::Duration;
    use tower::Service as _;

    const SECRET: &str = "middleware-test-secret-32-bytes-min";

    async fn whoami(Extension(auth): Extension<AuthContext>) -> String {
        auth.user_id.to_string()
    }

    fn app(keys: JwtKeys) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn(move |req, next| {
                jwt_auth_middleware(keys.clone(), req, next)
            }))
    }

    fn request(auth: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
    }

    #[test]
    fn test_auth_error_is_unauthorized() {
        for err in [
            AuthError::MissingCredentials,
            AuthError::InvalidFormat,
            AuthError::InvalidToken("nope".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_valid_access_token_reaches_handler() {
        let keys = JwtKeys::new(SECRET, Duration::hours(1));
        let user_id = Uuid::new_v4();
        let token = keys.issue_access(user_id).unwrap().access_token;

        let response = app(keys)
            .call(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_invalid_token_is_rejected() {
        let keys = JwtKeys::new(SECRET, Duration::hours(1));
        let refresh = keys.issue_pair(Uuid::new_v4()).unwrap().refresh_token;

        for auth in [
            None,
            Some("Token abc".to_string()),
            Some("Bearer not-a-jwt".to_string()),
            Some(format!("Bearer {}", refresh)),
        ] {
            let response = app(keys.clone()).call(request(auth.as_deref())).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", auth);
        }
    }
}
