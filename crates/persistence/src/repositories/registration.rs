//! Repository for registration database operations.

use domain::models::NewRegistration;
use sqlx::PgPool;

use crate::entities::{RegistrationEntity, TrackDb};

/// Repository for registration operations.
///
/// Records are insert-only: the system never updates or deletes a
/// registration once stored.
#[derive(Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Creates a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new registration.
    ///
    /// The id and `created_at` are assigned by the database; concurrent
    /// inserts each receive their own timestamp.
    pub async fn create(
        &self,
        new: &NewRegistration,
    ) -> Result<RegistrationEntity, sqlx::Error> {
        sqlx::query_as::<_, RegistrationEntity>(
            r#"
            INSERT INTO registrations (name, email, registration_type, company, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, registration_type, company, phone, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(TrackDb::from(new.registration_type))
        .bind(&new.company)
        .bind(&new.phone)
        .fetch_one(&self.pool)
        .await
    }

    /// Lists registrations, most recent first.
    ///
    /// Ordering is a read-time sort on `created_at`; it carries no
    /// guarantee between records sharing a timestamp.
    pub async fn list(&self, limit: i64) -> Result<Vec<RegistrationEntity>, sqlx::Error> {
        sqlx::query_as::<_, RegistrationEntity>(
            r#"
            SELECT id, name, email, registration_type, company, phone, created_at
            FROM registrations
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
