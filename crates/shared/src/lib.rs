//! Shared utilities for the conference registration backend.
//!
//! This crate provides the field validation rules used by both the
//! registration form controller and the HTTP service, so neither side
//! drifts from the other.

pub mod validation;
