//! Repository implementations for database operations.

pub mod registration;

pub use registration::RegistrationRepository;
