//! Common validation rules for registration fields.
//!
//! These functions are the single rule set behind both client-side and
//! server-side validation. Error messages are user-facing and rendered
//! next to the offending form field.

use lazy_static::lazy_static;
use validator::ValidationError;

lazy_static! {
    /// Matches `local@domain.tld` where no part contains whitespace or
    /// a second `@`.
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validates that a name is non-empty after trimming whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("name_required");
        err.message = Some("Name is required".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that an email is present and matches the expected pattern.
///
/// A missing email and a malformed email produce distinct messages so the
/// form can tell the user which problem to fix.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        let mut err = ValidationError::new("email_required");
        err.message = Some("Email is required".into());
        return Err(err);
    }
    if !EMAIL_REGEX.is_match(email) {
        let mut err = ValidationError::new("email_format");
        err.message = Some("Invalid email format".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a company name is non-empty after trimming whitespace.
///
/// Only invoked for the professional track; the student track never
/// requires a company.
pub fn validate_company(company: &str) -> Result<(), ValidationError> {
    if company.trim().is_empty() {
        let mut err = ValidationError::new("company_required");
        err.message = Some("Company is required".into());
        return Err(err);
    }
    Ok(())
}
