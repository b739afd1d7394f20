//! Validation errors raised while translating a request.
//!
//! Every kind maps to a client error (HTTP 400). The message texts for
//! variable expressions and sort specifications are part of the API
//! contract and asserted verbatim by tests.

use thiserror::Error;

use flowtrace_engine::EngineError;

use crate::variables::VariableScope;

/// A request was rejected before or during dispatch onto the query builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// A string-form variable filter had no operator position.
    #[error("variable query parameter has to have format KEY_OPERATOR_VALUE")]
    MalformedExpression,

    /// A variable filter used an unrecognized comparator token.
    #[error("Invalid {scope} comparator specified: {token}")]
    UnknownOperator {
        /// Determines the message wording (`variable` vs `process variable`).
        scope: VariableScope,
        /// The offending token.
        token: String,
    },

    /// Exactly one of `sortBy`/`sortOrder` was supplied.
    #[error("Only a single sorting parameter specified. sortBy and sortOrder required")]
    IncompleteSortSpecification,

    /// `sortBy` did not resolve against the endpoint's sort-key table.
    #[error("sortBy parameter has invalid value: {0}")]
    UnknownSortKey(String),

    /// `sortOrder` was neither `asc` nor `desc`.
    #[error("sortOrder parameter has invalid value: {0}")]
    InvalidSortDirection(String),

    /// A date-valued parameter could not be parsed.
    #[error("Cannot convert value \"{value}\" of parameter \"{parameter}\" to a date")]
    UnparsableDate {
        /// The parameter that carried the value.
        parameter: String,
        /// The raw value.
        value: String,
    },

    /// A variable value filter was supplied without a variable name.
    #[error(
        "Only a single variable value parameter specified: variable name and value are required to be able to query after a specific variable value."
    )]
    IncompleteVariableValue,

    /// A parameter carried a value of the wrong shape or type.
    #[error("Invalid value for parameter \"{parameter}\": {reason}")]
    InvalidParameterValue {
        /// The parameter name.
        parameter: String,
        /// What was wrong with the value.
        reason: String,
    },
}

impl InvalidRequest {
    /// Stable kind name used as the `type` field of error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidRequest::MalformedExpression => "MalformedExpression",
            InvalidRequest::UnknownOperator { .. } => "UnknownOperator",
            InvalidRequest::IncompleteSortSpecification => "IncompleteSortSpecification",
            InvalidRequest::UnknownSortKey(_) => "UnknownSortKey",
            InvalidRequest::InvalidSortDirection(_) => "InvalidSortDirection",
            InvalidRequest::UnparsableDate { .. } => "UnparsableDate",
            InvalidRequest::IncompleteVariableValue => "IncompleteVariableValue",
            InvalidRequest::InvalidParameterValue { .. } => "InvalidParameterValue",
        }
    }

    pub(crate) fn invalid_value(parameter: &str, reason: impl Into<String>) -> Self {
        InvalidRequest::InvalidParameterValue {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure of one translated query: either the request itself was invalid,
/// or the engine rejected the composed query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The request failed validation in the translation layer.
    #[error(transparent)]
    Invalid(#[from] InvalidRequest),

    /// The engine rejected a builder call or a terminal operation.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_expression_messages() {
        assert_eq!(
            InvalidRequest::MalformedExpression.to_string(),
            "variable query parameter has to have format KEY_OPERATOR_VALUE"
        );
        assert_eq!(
            InvalidRequest::UnknownOperator {
                scope: VariableScope::Variable,
                token: "foo".to_string(),
            }
            .to_string(),
            "Invalid variable comparator specified: foo"
        );
        assert_eq!(
            InvalidRequest::UnknownOperator {
                scope: VariableScope::ProcessVariable,
                token: "foo".to_string(),
            }
            .to_string(),
            "Invalid process variable comparator specified: foo"
        );
    }

    #[test]
    fn test_sort_messages() {
        assert_eq!(
            InvalidRequest::IncompleteSortSpecification.to_string(),
            "Only a single sorting parameter specified. sortBy and sortOrder required"
        );
        assert_eq!(
            InvalidRequest::UnknownSortKey("anInvalidSortByOption".to_string()).to_string(),
            "sortBy parameter has invalid value: anInvalidSortByOption"
        );
        assert_eq!(
            InvalidRequest::InvalidSortDirection("sideways".to_string()).to_string(),
            "sortOrder parameter has invalid value: sideways"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(InvalidRequest::MalformedExpression.kind(), "MalformedExpression");
        assert_eq!(
            InvalidRequest::UnparsableDate {
                parameter: "startedBefore".to_string(),
                value: "notADate".to_string(),
            }
            .kind(),
            "UnparsableDate"
        );
    }

    #[test]
    fn test_query_error_wraps_engine_error() {
        let err: QueryError = EngineError::validation("bad combination").into();
        assert_eq!(err.to_string(), "bad combination");
    }
}
