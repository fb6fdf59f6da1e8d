//! Wire-level error values
//!
//! Two failure kinds exist at this layer. [`ApiErrors`] wraps the problems a
//! non-2xx response reports in its JSON:API `errors` array. [`DecodeError`]
//! covers payloads this crate refuses to decode, most importantly an
//! unrecognized `type` discriminant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One JSON:API error object as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short human-readable summary of the problem
    pub title: String,
    /// HTTP status code, as the wire string (e.g. `"400"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Problem detail specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    /// The status field parsed as a numeric HTTP status, when present and
    /// well-formed.
    pub fn status_code(&self) -> Option<u16> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            Some(status) => write!(f, "{} ({})", self.title, status)?,
            None => write!(f, "{}", self.title)?,
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

/// The decoded body of a non-2xx response: one or more server-reported
/// problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    /// The JSON:API `errors` array
    pub errors: Vec<ApiError>,
}

impl ApiErrors {
    /// Decode a JSON:API error body.
    ///
    /// Total over arbitrary input: a body without a well-formed `errors`
    /// array still yields a structured value carrying the raw body as
    /// detail, so a failure response never turns into a panic or an empty
    /// error.
    pub fn from_json_api(body: &Value) -> Self {
        if let Some(errors) = body.get("errors") {
            if let Ok(errors) = serde_json::from_value::<Vec<ApiError>>(errors.clone()) {
                if !errors.is_empty() {
                    return Self { errors };
                }
            }
        }
        Self {
            errors: vec![ApiError {
                title: "Unrecognized error response".to_string(),
                status: None,
                detail: Some(body.to_string()),
            }],
        }
    }

    /// The first reported problem.
    ///
    /// The server always reports at least one; `from_json_api` guarantees a
    /// non-empty list.
    pub fn first(&self) -> Option<&ApiError> {
        self.errors.first()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiErrors {}

/// Failure to decode a response payload into a typed value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The `type` discriminant is not in the known set
    #[error("unknown resource type `{resource_type}`")]
    UnknownType { resource_type: String },

    /// A required field is absent from the payload
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// The payload does not have the expected JSON:API shape
    #[error("malformed document: {detail}")]
    Malformed { detail: String },

    /// A resource object failed to deserialize into its DTO
    #[error("invalid resource object: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Unknown `type` discriminant.
    pub fn unknown_type(resource_type: impl Into<String>) -> Self {
        Self::UnknownType {
            resource_type: resource_type.into(),
        }
    }

    /// Missing required field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Malformed document shape.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_decodes_title_and_status() {
        let body = json!({"errors": [{"title": "Bad Request", "status": "400"}]});
        let errors = ApiErrors::from_json_api(&body);
        assert_eq!(errors.errors.len(), 1);
        let first = errors.first().unwrap();
        assert_eq!(first.title, "Bad Request");
        assert_eq!(first.status.as_deref(), Some("400"));
        assert_eq!(first.status_code(), Some(400));
    }

    #[test]
    fn test_error_body_keeps_every_problem() {
        let body = json!({"errors": [
            {"title": "Bad Request", "status": "400", "detail": "amount must be positive"},
            {"title": "Invalid relationship", "status": "400"}
        ]});
        let errors = ApiErrors::from_json_api(&body);
        assert_eq!(errors.errors.len(), 2);
        assert!(errors.to_string().contains("amount must be positive"));
        assert!(errors.to_string().contains("Invalid relationship"));
    }

    #[test]
    fn test_unrecognized_error_body_is_still_structured() {
        let body = json!({"message": "upstream exploded"});
        let errors = ApiErrors::from_json_api(&body);
        assert_eq!(errors.errors.len(), 1);
        let first = errors.first().unwrap();
        assert_eq!(first.title, "Unrecognized error response");
        assert!(first.detail.as_deref().unwrap().contains("upstream exploded"));
    }

    #[test]
    fn test_decode_error_names_the_discriminant() {
        let err = DecodeError::unknown_type("cryptoPayment");
        assert_eq!(err.to_string(), "unknown resource type `cryptoPayment`");
    }
}
