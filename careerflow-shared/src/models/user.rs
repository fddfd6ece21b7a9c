/// User model and database operations
///
/// A user is both the account that authenticates and the person the career
/// profile describes. Every other profile entity belongs to exactly one user
/// and is removed with it (`ON DELETE CASCADE`).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(200) NOT NULL,
///     email VARCHAR(200) NOT NULL,
///     password_hash VARCHAR(255) NOT NULL,
///     phone VARCHAR(20),
///     city VARCHAR(100),
///     state VARCHAR(2),
///     photo_path VARCHAR(500),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// CREATE UNIQUE INDEX users_email_key ON users (LOWER(email));
/// ```
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::models::user::{User, CreateUser};
/// use careerflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     name: "Jane Doe".to_string(),
///     email: "jane@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     phone: None,
///     city: Some("Recife".to_string()),
///     state: Some("PE".to_string()),
/// }).await?;
///
/// let found = User::find_by_email(&pool, "JANE@example.com").await?;
/// assert_eq!(found.map(|u| u.id), Some(user.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;

/// Name of the unique index guarding case-insensitive email uniqueness
pub const EMAIL_UNIQUE_INDEX: &str = "users_email_key";

/// User account and contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Full name
    pub name: String,

    /// Email address, unique ignoring case
    pub email: String,

    /// Argon2id password hash
    ///
    /// Never serialized; responses that embed a user must not leak it.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub phone: Option<String>,

    pub city: Option<String>,

    /// Two-letter state code
    pub state: Option<String>,

    /// Reference to an uploaded photo, if any
    pub photo_path: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,

    pub email: String,

    /// Argon2id password hash (NOT plaintext password!)
    pub password_hash: String,

    pub phone: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,
}

/// Input for updating an existing user
///
/// All fields are optional. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,

    pub phone: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub photo_path: Option<String>,
}

impl UpdateUser {
    /// Returns true when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.photo_path.is_none()
    }
}

impl User {
    /// Formats city and state for display
    ///
    /// Returns "City, ST" when both are present, whichever one is present
    /// otherwise, and an empty string when neither is.
    ///
    /// # Example
    ///
    /// ```
    /// # use careerflow_shared::models::user::User;
    /// # fn example(mut user: User) {
    /// user.city = Some("Recife".to_string());
    /// user.state = Some("PE".to_string());
    /// assert_eq!(user.location(), "Recife, PE");
    /// # }
    /// ```
    pub fn location(&self) -> String {
        let city = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let state = self.state.as_deref().map(str::trim).filter(|s| !s.is_empty());

        match (city, state) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists, ignoring case (violates `users_email_key`)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, phone, city, state)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password_hash, phone, city, state, photo_path,
                      created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.phone)
        .bind(data.city)
        .bind(data.state)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, city, state, photo_path,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address, ignoring case
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, city, state, photo_path,
                   created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether an email is already registered, ignoring case
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email.trim())
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Updates an existing user
    ///
    /// Only non-None fields in `data` are written. The `updated_at` timestamp
    /// is always refreshed.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE users SET updated_at = NOW()");
        let mut bind_count = 1;

        let columns = [
            ("name", data.name.is_some()),
            ("phone", data.phone.is_some()),
            ("city", data.city.is_some()),
            ("state", data.state.is_some()),
            ("photo_path", data.photo_path.is_some()),
        ];
        for (column, present) in columns {
            if present {
                bind_count += 1;
                query.push_str(&format!(", {} = ${}", column, bind_count));
            }
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, email, password_hash, phone, city, state, \
             photo_path, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(id);

        // Bind order must match the column order above
        for value in [
            data.name,
            data.phone,
            data.city,
            data.state,
            data.photo_path,
        ]
            .into_iter()
            .flatten()
        {
            q = q.bind(value);
        }

        let user = q.fetch_optional(pool).await?;

        Ok(user)
    }

    /// Deletes a user and, through cascading foreign keys, the whole profile
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if the user didn't exist
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for User {
    fn owner_id(&self) -> Uuid {
        self.id
    }
}
