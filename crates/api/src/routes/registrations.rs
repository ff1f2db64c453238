//! Registration routes: create a registration and list stored records.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::{ApiEnvelope, NewRegistration, Registration};
use persistence::repositories::RegistrationRepository;
use serde::Deserialize;
use tracing::{error, info};

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records to return; defaults and caps come from
    /// the limits configuration.
    pub limit: Option<i64>,
}

/// Create a new registration.
///
/// POST /api/register
///
/// The payload is re-validated server-side with the same rule set the
/// form controller uses, so the service never persists a record that
/// violates the registration invariants.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<NewRegistration>,
) -> Result<Json<ApiEnvelope<Registration>>, ApiError> {
    payload.validate_submission()?;

    let repo = RegistrationRepository::new(state.pool.clone());
    let entity = repo.create(&payload).await.map_err(|err| {
        error!(error = %err, "Failed to persist registration");
        ApiError::Internal("Registration failed".to_string())
    })?;

    let registration: Registration = entity.into();

    info!(
        registration_id = %registration.id,
        registration_type = %registration.registration_type,
        "Registration created"
    );

    Ok(Json(ApiEnvelope::new(registration)))
}

/// List stored registrations, most recent first.
///
/// GET /api/registrations?limit=N
pub async fn list_registrations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiEnvelope<Vec<Registration>>>, ApiError> {
    let limits = &state.config.limits;
    let limit = query
        .limit
        .unwrap_or(limits.default_page_size)
        .clamp(1, limits.max_page_size);

    let repo = RegistrationRepository::new(state.pool.clone());
    let entities = repo.list(limit).await.map_err(|err| {
        error!(error = %err, "Failed to query registrations");
        ApiError::Internal("Failed to fetch data".to_string())
    })?;

    let registrations: Vec<Registration> = entities.into_iter().map(Into::into).collect();

    info!(count = registrations.len(), "Listed registrations");

    Ok(Json(ApiEnvelope::new(registrations)))
}
