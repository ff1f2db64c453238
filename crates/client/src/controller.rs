//! The registration form controller.
//!
//! Owns the form state machine and the API client. One controller backs
//! one form instance; while a submission is in flight the state machine
//! refuses a second submit and the back navigation, so a single instance
//! can never issue duplicate concurrent requests.

use std::time::Duration;

use domain::models::{Registration, Track};
use tracing::warn;

use crate::api::{ApiClient, ClientError};
use crate::state::{validate, FormField, FormState, View};

/// What the controller does when the service cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportFallback {
    /// Surface the failure as a form error. The default: the UI must
    /// accurately reflect whether the record was durably stored.
    #[default]
    SurfaceError,

    /// Accept the submission locally and show the success view even
    /// though nothing was stored. Only for offline demo operation;
    /// must be switched on explicitly.
    OfflineSuccess,
}

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the registration service.
    pub base_url: String,
    /// Per-request timeout; elapsing counts as a transport failure.
    pub request_timeout: Duration,
    /// How long the success view stays up before returning to landing.
    pub success_dwell: Duration,
    /// Policy for transport failures.
    pub transport_fallback: TransportFallback,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(10),
            success_dwell: Duration::from_secs(3),
            transport_fallback: TransportFallback::SurfaceError,
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The controller was not in a submittable state (wrong view or a
    /// submission already in flight); nothing changed.
    Suppressed,
    /// Validation failed; the per-field errors are in the state and no
    /// network call was made.
    Rejected,
    /// The service stored the registration.
    Created(Registration),
    /// Transport failed but the offline fallback accepted the form
    /// locally; no record was stored.
    OfflineAccepted,
    /// The submission failed; the general error is in the state.
    Failed,
}

/// General error shown when the service answered with a failure.
const SERVICE_ERROR: &str = "Registration failed. Please try again.";
/// General error shown when the service could not be reached.
const TRANSPORT_ERROR: &str = "Could not reach the registration service. Please try again.";

/// Drives the registration form. See the crate docs for the intended
/// ownership model.
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    api: ApiClient,
    success_dwell: Duration,
    transport_fallback: TransportFallback,
}

impl FormController {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let api = ApiClient::new(&config.base_url, config.request_timeout)?;
        Ok(Self {
            state: FormState::landing(),
            api,
            success_dwell: config.success_dwell,
            transport_fallback: config.transport_fallback,
        })
    }

    /// Current state snapshot for rendering.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// How long the success view should stay up.
    pub fn success_dwell(&self) -> Duration {
        self.success_dwell
    }

    /// Landing → form view for the chosen track.
    ///
    /// Ignored outside the landing view.
    pub fn select_track(&mut self, track: Track) {
        if self.state.view == View::Landing {
            self.state = self.state.with_track_selected(track);
        }
    }

    /// Sets a field value, clearing that field's error.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.state.submitting {
            return;
        }
        self.state = self.state.with_field(field, value.into());
    }

    /// Form → landing. Returns false (and does nothing) while a
    /// submission is in flight.
    pub fn go_back(&mut self) -> bool {
        if self.state.submitting || !matches!(self.state.view, View::Form(_)) {
            return false;
        }
        self.state = self.state.back_to_landing();
        true
    }

    /// Validates and, if the form is clean, submits it.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let track = match self.state.view {
            View::Form(track) if !self.state.submitting => track,
            _ => return SubmitOutcome::Suppressed,
        };

        let errors = validate(&self.state.fields, track);
        if !errors.is_empty() {
            self.state = self.state.with_errors(errors);
            return SubmitOutcome::Rejected;
        }

        self.state = self.state.begin_submit();
        let payload = self.state.fields.to_payload(track);

        match self.api.create_registration(&payload).await {
            Ok(registration) => {
                self.state = self.state.submit_succeeded();
                SubmitOutcome::Created(registration)
            }
            Err(ClientError::Transport(err)) => match self.transport_fallback {
                TransportFallback::SurfaceError => {
                    warn!(error = %err, "Registration submission could not reach the service");
                    self.state = self.state.submit_failed(TRANSPORT_ERROR);
                    SubmitOutcome::Failed
                }
                TransportFallback::OfflineSuccess => {
                    warn!(
                        error = %err,
                        "Service unreachable; accepting registration locally without storing it"
                    );
                    self.state = self.state.submit_succeeded();
                    SubmitOutcome::OfflineAccepted
                }
            },
            Err(err) => {
                warn!(error = %err, "Registration submission failed");
                self.state = self.state.submit_failed(SERVICE_ERROR);
                SubmitOutcome::Failed
            }
        }
    }

    /// Success → landing.
    pub fn dismiss_success(&mut self) {
        if self.state.view == View::Success {
            self.state = self.state.success_dismissed();
        }
    }

    /// Waits out the success dwell, then returns to landing.
    ///
    /// Convenience for shells without their own timer.
    pub async fn run_success_timer(&mut self) {
        if self.state.view == View::Success {
            tokio::time::sleep(self.success_dwell).await;
            self.dismiss_success();
        }
    }
}
