//! HTTP client for the registration service.

use domain::models::{ApiEnvelope, NewRegistration, Registration};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Transport and service failures are deliberately distinct: the form
/// controller reports them differently and must never confuse either
/// with success.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached (connect failure or timeout).
    #[error("Could not reach the registration service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Registration service returned {0}")]
    Service(StatusCode),

    /// The service answered 2xx but the body was not the expected shape.
    #[error("Invalid response from the registration service: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

/// Client for the registration service HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// Every request carries `timeout`; an elapsed timeout surfaces as a
    /// transport error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submits a registration and returns the stored record.
    pub async fn create_registration(
        &self,
        payload: &NewRegistration,
    ) -> Result<Registration, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/register", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service(status));
        }

        let envelope: ApiEnvelope<Registration> = response
            .json()
            .await
            .map_err(ClientError::InvalidResponse)?;
        Ok(envelope.data)
    }

    /// Fetches stored registrations, most recent first.
    pub async fn list_registrations(&self) -> Result<Vec<Registration>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/registrations", self.base_url))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service(status));
        }

        let envelope: ApiEnvelope<Vec<Registration>> = response
            .json()
            .await
            .map_err(ClientError::InvalidResponse)?;
        Ok(envelope.data)
    }
}
