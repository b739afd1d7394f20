//! Error types for the history REST API.
//!
//! Every error is serialized as a JSON object
//! `{"type": <kind>, "message": <text>}`.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | `type` |
//! |-------|-------------|--------|
//! | Request validation (`InvalidRequest`) | 400 | the validation kind, e.g. `UnknownSortKey` |
//! | Engine validation failure | 400 | `EngineValidationFailure` |
//! | Engine authorization failure | 403 | `EngineAuthorizationFailure` |
//! | Missing singleton record | 404 | `NotFound` |
//! | Engine internal failure | 500 | `InternalError` |
//! | Malformed request (JSON body, query string) | 400 | `InvalidRequest` |

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flowtrace_engine::EngineError;
use flowtrace_query::{InvalidRequest, QueryError};

/// The primary error type for REST API operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request failed validation in the translation layer (HTTP 400).
    Invalid(InvalidRequest),

    /// The engine rejected the query (status depends on the kind).
    Engine(EngineError),

    /// A singleton lookup matched nothing (HTTP 404).
    NotFound {
        /// Human-readable description of what was looked up.
        message: String,
    },

    /// The request itself was malformed (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Convenience constructor for malformed requests.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for missing singleton records.
    pub fn not_found(message: impl Into<String>) -> Self {
        RestError::NotFound {
            message: message.into(),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::Invalid(_) | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Engine(EngineError::Validation(_)) => StatusCode::BAD_REQUEST,
            RestError::Engine(EngineError::Authorization(_)) => StatusCode::FORBIDDEN,
            RestError::Engine(EngineError::NotFound(_)) | RestError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            RestError::Engine(EngineError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The stable kind name used as the `type` field of the payload.
    pub fn kind(&self) -> &'static str {
        match self {
            RestError::Invalid(invalid) => invalid.kind(),
            RestError::Engine(EngineError::Validation(_)) => "EngineValidationFailure",
            RestError::Engine(EngineError::Authorization(_)) => "EngineAuthorizationFailure",
            RestError::Engine(EngineError::NotFound(_)) | RestError::NotFound { .. } => "NotFound",
            RestError::Engine(EngineError::Internal(_)) => "InternalError",
            RestError::BadRequest { .. } => "InvalidRequest",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::Invalid(invalid) => invalid.fmt(f),
            RestError::Engine(engine) => engine.fmt(f),
            RestError::NotFound { message } | RestError::BadRequest { message } => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl From<InvalidRequest> for RestError {
    fn from(err: InvalidRequest) -> Self {
        RestError::Invalid(err)
    }
}

impl From<EngineError> for RestError {
    fn from(err: EngineError) -> Self {
        RestError::Engine(err)
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Invalid(invalid) => RestError::Invalid(invalid),
            QueryError::Engine(engine) => RestError::Engine(engine),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "type": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = RestError::from(InvalidRequest::IncompleteSortSpecification);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "IncompleteSortSpecification");
        assert_eq!(
            err.to_string(),
            "Only a single sorting parameter specified. sortBy and sortOrder required"
        );
    }

    #[test]
    fn test_engine_error_status_mapping() {
        assert_eq!(
            RestError::from(EngineError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::from(EngineError::authorization("no")).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            RestError::from(EngineError::not_found("gone")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::from(EngineError::Internal("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_engine_kind_names() {
        assert_eq!(
            RestError::from(EngineError::validation("bad")).kind(),
            "EngineValidationFailure"
        );
        assert_eq!(
            RestError::from(EngineError::authorization("no")).kind(),
            "EngineAuthorizationFailure"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = RestError::not_found("Historic process instance with id anId does not exist");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "NotFound");
        assert!(err.to_string().contains("anId"));
    }
}
