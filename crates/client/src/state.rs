//! Form state machine.
//!
//! State is an explicit value replaced wholesale on every transition:
//! each operation builds the next [`FormState`] from the previous one
//! instead of mutating fields in place, so a snapshot handed to the
//! rendering layer can never change underneath it.

use std::collections::BTreeMap;

use domain::models::{NewRegistration, Track};

/// Current view of the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Form(Track),
    Success,
}

/// A field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Company => "company",
        }
    }

    /// Maps a validation error key back to the form field it belongs to.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "company" => Some(FormField::Company),
            _ => None,
        }
    }
}

/// Current values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl FieldValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
        }
    }

    fn with(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Phone => next.phone = value,
            FormField::Company => next.company = value,
        }
        next
    }

    /// Builds the submission payload for a track.
    ///
    /// Blank optional inputs become `None` rather than empty strings.
    pub fn to_payload(&self, track: Track) -> NewRegistration {
        let optional = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        NewRegistration {
            name: self.name.clone(),
            email: self.email.clone(),
            registration_type: track,
            company: optional(&self.company),
            phone: optional(&self.phone),
        }
    }
}

/// Snapshot of the whole form at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub view: View,
    pub fields: FieldValues,
    pub errors: BTreeMap<FormField, String>,
    pub general_error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    /// Initial state: the landing view with everything cleared.
    pub fn landing() -> Self {
        Self {
            view: View::Landing,
            fields: FieldValues::default(),
            errors: BTreeMap::new(),
            general_error: None,
            submitting: false,
        }
    }

    /// Landing → form view for the chosen track, all inputs cleared.
    pub fn with_track_selected(&self, track: Track) -> Self {
        Self {
            view: View::Form(track),
            ..Self::landing()
        }
    }

    /// Updates one field and clears its error.
    ///
    /// Other fields' errors stay untouched; they are only re-evaluated on
    /// the next submit. The general error clears on any edit.
    pub fn with_field(&self, field: FormField, value: String) -> Self {
        let mut errors = self.errors.clone();
        errors.remove(&field);
        Self {
            fields: self.fields.with(field, value),
            errors,
            general_error: None,
            ..self.clone()
        }
    }

    /// Stores the per-field validation errors from a rejected submit.
    pub fn with_errors(&self, errors: BTreeMap<FormField, String>) -> Self {
        Self {
            errors,
            ..self.clone()
        }
    }

    /// Marks a submission as in flight.
    pub fn begin_submit(&self) -> Self {
        Self {
            submitting: true,
            errors: BTreeMap::new(),
            general_error: None,
            ..self.clone()
        }
    }

    /// Submission accepted: clear the form and show the success view.
    pub fn submit_succeeded(&self) -> Self {
        Self {
            view: View::Success,
            ..Self::landing()
        }
    }

    /// Submission failed: keep the form values, surface a general error.
    pub fn submit_failed(&self, message: impl Into<String>) -> Self {
        Self {
            general_error: Some(message.into()),
            submitting: false,
            ..self.clone()
        }
    }

    /// Form → landing, clearing inputs and errors.
    pub fn back_to_landing(&self) -> Self {
        Self::landing()
    }

    /// Success view dismissed, back to landing.
    pub fn success_dismissed(&self) -> Self {
        Self::landing()
    }
}

/// Runs the shared rule set over the current inputs.
///
/// Pure: returns the per-field error map without touching any state.
/// Empty map means the form may be submitted.
pub fn validate(fields: &FieldValues, track: Track) -> BTreeMap<FormField, String> {
    match fields.to_payload(track).validate_submission() {
        Ok(()) => BTreeMap::new(),
        Err(errors) => errors
            .field_errors()
            .iter()
            .filter_map(|(key, errs)| {
                let field = FormField::from_key(key)?;
                let message = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))?;
                Some((field, message))
            })
            .collect(),
    }
}
