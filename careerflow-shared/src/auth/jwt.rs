/// JWT token generation and validation
///
/// Tokens are HS256-signed and carry the user ID as subject. Two kinds are
/// issued at login: a short-lived access token that authenticates API calls
/// and a long-lived refresh token that can only be exchanged for a new access
/// token.
///
/// # Example
///
/// ```
/// use careerflow_shared::auth::jwt::{JwtKeys, TokenType};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let keys = JwtKeys::new("a-secret-that-is-at-least-32-bytes!!", Duration::hours(24));
/// let user_id = Uuid::new_v4();
///
/// let pair = keys.issue_pair(user_id)?;
/// let claims = keys.validate_access(&pair.access_token)?;
/// assert_eq!(claims.sub, user_id);
/// assert_eq!(claims.token_type, TokenType::Access);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of the `iss` claim on every token
pub const ISSUER: &str = "careerflow";

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to create token: {0}")]
    CreateError(String),

    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid issuer")]
    InvalidIssuer,

    /// A refresh token was presented where an access token is required, or the reverse
    #[error("Expected {expected} token")]
    WrongTokenType { expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

/// JWT claims
///
/// Standard claims (`sub`, `iss`, `iat`, `exp`, `nbf`) plus the token type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: Uuid,

    /// Issuer - Always "careerflow"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    pub token_type: TokenType,
}

impl Claims {
    /// Creates claims that expire `expires_in` from now
    pub fn new(user_id: Uuid, token_type: TokenType, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            nbf: now.timestamp(),
            token_type,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_else(Utc::now)
    }
}

/// Tokens handed out at registration and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiration of the access token
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signing secret and token lifetimes
#[derive(Clone)]
pub struct JwtKeys {
    secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl JwtKeys {
    /// Refresh tokens live for 30 days
    pub const REFRESH_TTL_DAYS: i64 = 30;

    pub fn new(secret: impl Into<String>, access_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl: Duration::days(Self::REFRESH_TTL_DAYS),
        }
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Issues an access token for `user_id`
    pub fn issue_access(&self, user_id: Uuid) -> Result<AccessToken, JwtError> {
        let claims = Claims::new(user_id, TokenType::Access, self.access_ttl);
        let access_token = create_token(&claims, &self.secret)?;

        Ok(AccessToken {
            access_token,
            expires_at: claims.expires_at(),
        })
    }

    /// Issues an access token and a refresh token for `user_id`
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, JwtError> {
        let access = self.issue_access(user_id)?;
        let refresh_claims = Claims::new(user_id, TokenType::Refresh, self.refresh_ttl);

        Ok(TokenPair {
            access_token: access.access_token,
            refresh_token: create_token(&refresh_claims, &self.secret)?,
            expires_at: access.expires_at,
        })
    }

    pub fn validate_access(&self, token: &str) -> Result<Claims, JwtError> {
        validate_typed(token, &self.secret, TokenType::Access)
    }

    pub fn validate_refresh(&self, token: &str) -> Result<Claims, JwtError> {
        validate_typed(token, &self.secret, TokenType::Refresh)
    }

    /// Exchanges a valid refresh token for a new access token
    pub fn refresh(&self, refresh_token: &str) -> Result<AccessToken, JwtError> {
        let claims = self.validate_refresh(refresh_token)?;
        self.issue_access(claims.sub)
    }
}

/// Signs `claims` with HS256
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Verifies signature, expiration, not-before and issuer, returning the claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

fn validate_typed(token: &str, secret: &str, expected: TokenType) -> Result<Claims, JwtError> {
    let claims = validate_token(token, secret)?;

    if claims.token_type != expected {
        return Err(JwtError::WrongTokenType {
            expected: expected.as_str(),
        });
    }

    Ok(claims)
}
