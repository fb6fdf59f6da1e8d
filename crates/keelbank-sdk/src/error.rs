//! SDK error type
//!
//! Every façade method returns exactly one of success or [`Error`]. Server
//! failures (non-2xx) arrive as [`Error::Api`] values, never panics; decode
//! failures are a distinguishable kind so callers can tell "the server said
//! no" apart from "the payload made no sense".

use keelbank_types::{ApiErrors, DecodeError};
use thiserror::Error;

/// SDK error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-2xx status and a JSON:API error body
    #[error("api error: {0}")]
    Api(ApiErrors),

    /// A 2xx response carried a payload this SDK refuses to decode
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The HTTP exchange itself failed
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request failed to serialize
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The server-reported problems, when this is an API error.
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Api(errors) => Some(errors),
            _ => None,
        }
    }
}

/// SDK result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display_carries_title_and_status() {
        let errors = ApiErrors::from_json_api(&json!({
            "errors": [{"title": "Bad Request", "status": "400"}]
        }));
        let err = Error::Api(errors);
        assert_eq!(err.to_string(), "api error: Bad Request (400)");
        assert!(err.api_errors().is_some());
    }
}
