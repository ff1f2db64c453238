use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ValidationDetail>,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Error body serialized to clients: `{"error": "...", "details": [...]}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
            ApiError::ServiceUnavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, message, None)
            }
        };

        let body = ErrorBody {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                })
            })
            .collect();

        let message = if details.len() == 1 {
            details[0].message.clone()
        } else {
            format!("{} validation errors", details.len())
        };

        ApiError::Validation { message, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use validator::ValidationError;

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation {
            message: "Invalid email format".to_string(),
            details: vec![ValidationDetail {
                field: "email".to_string(),
                message: "Invalid email format".to_string(),
            }],
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("Registration failed".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let error = ApiError::ServiceUnavailable("store unreachable".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!(
                "{}",
                ApiError::Validation {
                    message: "test".to_string(),
                    details: vec![],
                }
            ),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::Internal("test".to_string())),
            "Internal error: test"
        );
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let body = ErrorBody {
            error: "Registration failed".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Registration failed"}"#);
    }

    #[test]
    fn test_from_validation_errors_single() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = ValidationError::new("email_format");
        err.message = Some("Invalid email format".into());
        errors.add("email", err);

        let api_error: ApiError = errors.into();
        match api_error {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "Invalid email format");
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "email");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_from_validation_errors_multiple() {
        let mut errors = validator::ValidationErrors::new();
        let mut name_err = ValidationError::new("name_required");
        name_err.message = Some("Name is required".into());
        errors.add("name", name_err);
        let mut email_err = ValidationError::new("email_required");
        email_err.message = Some("Email is required".into());
        errors.add("email", email_err);

        let api_error: ApiError = errors.into();
        match api_error {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "2 validation errors");
                assert_eq!(details.len(), 2);
            }
            _ => panic!("Expected Validation error"),
        }
    }
}
