//! Error type surfaced by the history engine.
//!
//! Every query-builder call is fallible: the engine may reject a filter
//! value, a combination of filters, or the caller's permissions at any
//! point between builder creation and the terminal operation. The REST
//! layer maps these kinds onto HTTP statuses (400/403/404/500).

use thiserror::Error;

/// Result alias for all engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// An error raised by the history engine while a query is being composed
/// or executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine rejected a filter value or a combination of filter
    /// calls (e.g. mutually exclusive state filters).
    #[error("{0}")]
    Validation(String),

    /// The caller is not authorized to run the composed query.
    #[error("{0}")]
    Authorization(String),

    /// A singleton lookup did not match any history record.
    #[error("{0}")]
    NotFound(String),

    /// The engine failed internally while executing the query.
    #[error("{0}")]
    Internal(String),
}

impl EngineError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }

    /// Convenience constructor for authorization failures.
    pub fn authorization(message: impl Into<String>) -> Self {
        EngineError::Authorization(message.into())
    }

    /// Convenience constructor for missing singleton records.
    pub fn not_found(message: impl Into<String>) -> Self {
        EngineError::NotFound(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_passes_message_through() {
        let err = EngineError::validation("active and suspended are mutually exclusive");
        assert_eq!(
            err.to_string(),
            "active and suspended are mutually exclusive"
        );
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            EngineError::authorization("denied"),
            EngineError::Authorization(_)
        ));
        assert!(matches!(
            EngineError::not_found("no such instance"),
            EngineError::NotFound(_)
        ));
    }
}
