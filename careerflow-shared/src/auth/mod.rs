/// Authentication and authorization utilities
///
/// # Modules
///
/// - [`password`]: Argon2id hashing and the password policy
/// - [`jwt`]: access and refresh tokens
/// - [`middleware`]: Bearer-token middleware producing an `AuthContext`
/// - [`authorization`]: ownership checks on profile records
///
/// # Example
///
/// ```
/// use careerflow_shared::auth::jwt::JwtKeys;
/// use careerflow_shared::auth::password::{hash_password, verify_password};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("S3cret!pass")?;
/// assert!(verify_password("S3cret!pass", &hash)?);
///
/// let keys = JwtKeys::new("a-secret-that-is-at-least-32-bytes!!", Duration::hours(24));
/// let tokens = keys.issue_pair(Uuid::new_v4())?;
/// assert!(!tokens.access_token.is_empty());
/// # Ok(())
/// # }
/// ```

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
