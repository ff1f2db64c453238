//! Registration domain models and the shared validation rule set.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Registration track determining which optional fields become required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Student,
    Professional,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Student => "student",
            Track::Professional => "professional",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown track value.
#[derive(Debug, thiserror::Error)]
#[error("Unknown registration track: {0}")]
pub struct ParseTrackError(pub String);

impl FromStr for Track {
    type Err = ParseTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Track::Student),
            "professional" => Ok(Track::Professional),
            other => Err(ParseTrackError(other.to_string())),
        }
    }
}

/// A stored registration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Registration {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub registration_type: Track,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a registration.
///
/// Both the form controller and the service validate this payload through
/// [`NewRegistration::validate_submission`], so the rules cannot drift
/// between the two sides.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewRegistration {
    #[validate(custom(function = "shared::validation::validate_name"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_email"))]
    pub email: String,

    pub registration_type: Track,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewRegistration {
    /// Applies the full rule set, including the track-conditional company
    /// requirement the derive cannot express.
    ///
    /// The phone field is never validated.
    pub fn validate_submission(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.registration_type == Track::Professional
            && self
                .company
                .as_deref()
                .map_or(true, |company| company.trim().is_empty())
        {
            let mut err = ValidationError::new("company_required");
            err.message = Some("Company is required".into());
            errors.add("company", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn payload(track: Track) -> NewRegistration {
        NewRegistration {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            registration_type: track,
            company: None,
            phone: None,
        }
    }

    fn messages_for(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .get(field)
            .map(|errs| {
                errs.iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_track_serde_round_trip() {
        assert_eq!(serde_json::to_string(&Track::Student).unwrap(), "\"student\"");
        assert_eq!(
            serde_json::to_string(&Track::Professional).unwrap(),
            "\"professional\""
        );
        let track: Track = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(track, Track::Professional);
    }

    #[test]
    fn test_track_from_str() {
        assert_eq!("student".parse::<Track>().unwrap(), Track::Student);
        assert_eq!(
            "professional".parse::<Track>().unwrap(),
            Track::Professional
        );
        assert!("attendee".parse::<Track>().is_err());
        assert!("Student".parse::<Track>().is_err());
    }

    #[test]
    fn test_valid_student_submission() {
        assert!(payload(Track::Student).validate_submission().is_ok());
    }

    #[test]
    fn test_name_required() {
        for name in ["", "   ", "\t"] {
            let mut p = payload(Track::Student);
            p.name = name.to_string();
            let errors = p.validate_submission().unwrap_err();
            assert_eq!(messages_for(&errors, "name"), ["Name is required"]);
        }
    }

    #[test]
    fn test_email_required() {
        let mut p = payload(Track::Student);
        p.email = String::new();
        let errors = p.validate_submission().unwrap_err();
        assert_eq!(messages_for(&errors, "email"), ["Email is required"]);
    }

    #[test]
    fn test_email_format() {
        let mut p = payload(Track::Professional);
        p.company = Some("Navy".to_string());
        p.name = "Grace Hopper".to_string();
        p.email = "not-an-email".to_string();
        let errors = p.validate_submission().unwrap_err();
        assert_eq!(messages_for(&errors, "email"), ["Invalid email format"]);
        // The company was provided, so only the email is reported.
        assert!(messages_for(&errors, "company").is_empty());
    }

    #[test]
    fn test_company_required_for_professional() {
        for company in [None, Some("".to_string()), Some("   ".to_string())] {
            let mut p = payload(Track::Professional);
            p.company = company;
            let errors = p.validate_submission().unwrap_err();
            assert_eq!(messages_for(&errors, "company"), ["Company is required"]);
        }
    }

    #[test]
    fn test_company_never_required_for_student() {
        for company in [None, Some("".to_string()), Some("Acme".to_string())] {
            let mut p = payload(Track::Student);
            p.company = company;
            assert!(p.validate_submission().is_ok());
        }
    }

    #[test]
    fn test_phone_never_validated() {
        let mut p = payload(Track::Student);
        p.phone = Some("not a phone number at all".to_string());
        assert!(p.validate_submission().is_ok());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let p = NewRegistration {
            name: "  ".to_string(),
            email: "bad".to_string(),
            registration_type: Track::Professional,
            company: None,
            phone: None,
        };
        let errors = p.validate_submission().unwrap_err();
        assert_eq!(messages_for(&errors, "name"), ["Name is required"]);
        assert_eq!(messages_for(&errors, "email"), ["Invalid email format"]);
        assert_eq!(messages_for(&errors, "company"), ["Company is required"]);
    }

    #[test]
    fn test_generated_names_accepted() {
        for _ in 0..20 {
            let mut p = payload(Track::Student);
            p.name = Name().fake();
            assert!(p.validate_submission().is_ok());
        }
    }

    #[test]
    fn test_payload_serialization_omits_empty_optionals() {
        let p = payload(Track::Student);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("company"));
        assert!(!json.contains("phone"));
        assert!(json.contains("\"registration_type\":\"student\""));
    }

    #[test]
    fn test_payload_deserialization_without_optionals() {
        let p: NewRegistration = serde_json::from_str(
            r#"{"name":"Ada Lovelace","email":"ada@example.com","registration_type":"student"}"#,
        )
        .unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert!(p.company.is_none());
        assert!(p.phone.is_none());
    }
}
