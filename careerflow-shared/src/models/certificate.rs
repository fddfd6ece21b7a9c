/// Certificate model
///
/// A certificate without an end date never expires.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE certificates (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     name VARCHAR(200) NOT NULL,
///     description VARCHAR(1000),
///     start_date TIMESTAMPTZ NOT NULL,
///     end_date TIMESTAMPTZ,
///     certificate_path VARCHAR(500),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Duration, Utc};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::authorization::OwnedResource;

/// Serializes with a derived `is_valid` flag, evaluated at serialization time
#[derive(Debug, Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Issue date
    pub start_date: DateTime<Utc>,
    /// Expiration date, None for certificates that never expire
    pub end_date: Option<DateTime<Utc>>,
    pub certificate_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Serialize for Certificate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Certificate", 10)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("start_date", &self.start_date)?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("certificate_path", &self.certificate_path)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("created_at", &self.created_at)?;
        state.serialize_field("updated_at", &self.updated_at)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCertificate {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub certificate_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCertificate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub certificate_path: Option<String>,
}

impl Certificate {
    /// True when the certificate has no end date or expires after `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date.map_or(true, |end| end > now)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Whole days until expiration; None when the certificate never expires
    ///
    /// Negative for certificates that already expired.
    pub fn days_until_expiration(&self, now: DateTime<Utc>) -> Option<i64> {
        self.end_date.map(|end| (end - now).num_days())
    }

    pub async fn create(pool: &PgPool, data: CreateCertificate) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates
                (user_id, name, description, start_date, end_date, certificate_path)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, description, start_date, end_date,
                      certificate_path, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.certificate_path)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, user_id, name, description, start_date, end_date,
                   certificate_path, created_at, updated_at
            FROM certificates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's certificates, most recently issued first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, user_id, name, description, start_date, end_date,
                   certificate_path, created_at, updated_at
            FROM certificates
            WHERE user_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Certificates expiring between `now` and `now + days`, soonest first
    pub async fn list_expiring(
        pool: &PgPool,
        user_id: Uuid,
        now: DateTime<Utc>,
        days: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, user_id, name, description, start_date, end_date,
                   certificate_path, created_at, updated_at
            FROM certificates
            WHERE user_id = $1
              AND end_date IS NOT NULL
              AND end_date > $2
              AND end_date <= $3
            ORDER BY end_date
            "#,
        )
        .bind(user_id)
        .bind(now)
        .bind(now + Duration::days(days))
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateCertificate,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Certificate>(
            r#"
            UPDATE certificates
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                certificate_path = COALESCE($6, certificate_path),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, name, description, start_date, end_date,
                      certificate_path, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.certificate_path)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl OwnedResource for Certificate {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn certificate(end_date: Option<DateTime<Utc>>) -> Certificate {
        let issued = Utc.with_ymd_and_hms(2023, 1, 10, 0, 0, 0).unwrap();
        Certificate {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "AWS Solutions Architect".to_string(),
            description: None,
            start_date: issued,
            end_date,
            certificate_path: None,
            created_at: issued,
            updated_at: issued,
        }
    }

    #[test]
    fn test_validity() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert!(certificate(None).is_valid_at(now));
        assert!(certificate(Some(now + Duration::hours(1))).is_valid_at(now));
        assert!(!certificate(Some(now - Duration::hours(1))).is_valid_at(now));
    }

    #[test]
    fn test_serialized_validity_flag() {
        let lifetime = serde_json::to_value(certificate(None)).unwrap();
        assert_eq!(lifetime["is_valid"], true);
        assert_eq!(lifetime["name"], "AWS Solutions Architect");

        let expired = certificate(Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()));
        let json = serde_json::to_value(&expired).unwrap();
        assert_eq!(json["is_valid"], false);

        let back: Certificate = serde_json::from_value(json).unwrap();
        assert_eq!(back, expired);
    }

    #[test]
    fn test_days_until_expiration() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert_eq!(certificate(None).days_until_expiration(now), None);
        assert_eq!(
            certificate(Some(now + Duration::days(10) + Duration::hours(5)))
                .days_until_expiration(now),
            Some(10)
        );
        assert_eq!(
            certificate(Some(now - Duration::days(3))).days_until_expiration(now),
            Some(-3)
        );
    }
}
