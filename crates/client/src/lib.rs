//! Registration form controller for the conference registration frontend.
//!
//! This crate contains:
//! - The explicit form state machine (landing, form, success views)
//! - The shared validation applied before any network call
//! - The API client that submits registrations to the backend
//!
//! The rendering layer is out of scope; a UI shell owns a
//! [`FormController`], forwards user input to it, and redraws from
//! [`FormController::state`] after every call.

pub mod api;
pub mod controller;
pub mod state;

pub use api::{ApiClient, ClientError};
pub use controller::{ClientConfig, FormController, SubmitOutcome, TransportFallback};
pub use state::{FormField, FormState, View};
