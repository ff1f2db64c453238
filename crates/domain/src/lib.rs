//! Domain layer for the conference registration backend.
//!
//! This crate contains:
//! - Domain models (Registration, Track)
//! - The submission payload and its validation rule set
//! - The success envelope shared by the API and its clients

pub mod models;
