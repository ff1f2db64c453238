//! Registration entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Registration, Track};
use sqlx::FromRow;
use uuid::Uuid;

/// Database representation of a registration track.
///
/// Stored as lowercase TEXT rather than a Postgres enum so the column
/// stays readable in ad-hoc queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum TrackDb {
    Student,
    Professional,
}

impl From<TrackDb> for Track {
    fn from(db_track: TrackDb) -> Self {
        match db_track {
            TrackDb::Student => Track::Student,
            TrackDb::Professional => Track::Professional,
        }
    }
}

impl From<Track> for TrackDb {
    fn from(track: Track) -> Self {
        match track {
            Track::Student => TrackDb::Student,
            Track::Professional => TrackDb::Professional,
        }
    }
}

/// Database row mapping for the registrations table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub registration_type: TrackDb,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationEntity> for Registration {
    fn from(entity: RegistrationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            registration_type: entity.registration_type.into(),
            company: entity.company,
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }
}
