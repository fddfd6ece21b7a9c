/// Ownership checks for profile resources
///
/// Every profile record belongs to exactly one user. A request may only read
/// or modify records whose owner is the authenticated user; anything else is
/// rejected with [`AuthzError::NotAuthorized`], which the API maps to 403.
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::auth::authorization::require_owner;
/// use careerflow_shared::auth::middleware::AuthContext;
/// use careerflow_shared::models::skill::Skill;
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, auth: AuthContext, skill_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(skill) = Skill::find_by_id(&pool, skill_id).await? {
///     require_owner(&auth, &skill)?;
/// }
/// # Ok(())
/// # }
/// ```

use uuid::Uuid;

use super::middleware::AuthContext;

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// User doesn't own the resource
    #[error("Not authorized to access this resource")]
    NotAuthorized,
}

/// A record that belongs to a single user
pub trait OwnedResource {
    fn owner_id(&self) -> Uuid;
}

/// Checks that the authenticated user is `resource_owner_id`
pub fn require_ownership(auth: &AuthContext, resource_owner_id: Uuid) -> Result<(), AuthzError> {
    if auth.user_id != resource_owner_id {
        return Err(AuthzError::NotAuthorized);
    }

    Ok(())
}

/// Checks that the authenticated user owns `resource`
pub fn require_owner<R: OwnedResource + ?Sized>(
    auth: &AuthContext,
    resource: &R,
) -> Result<(), AuthzError> {
    require_ownership(auth, resource.owner_id())
}
