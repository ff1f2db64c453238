//! Success envelope for API responses.

use serde::{Deserialize, Serialize};

/// Wrapper around every successful API payload.
///
/// Serialized as `{"success": true, "data": ...}`; error responses use a
/// separate body and never carry this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Wraps a payload in a success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let envelope = ApiEnvelope::new(vec![1, 2, 3]);
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"success":true,"data":[1,2,3]}"#);
    }

    #[test]
    fn test_envelope_deserialization() {
        let envelope: ApiEnvelope<String> =
            serde_json::from_str(r#"{"success":true,"data":"ok"}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, "ok");
    }
}
