//! Variable filter expressions.
//!
//! A variable filter names a process/case variable, a comparison operator
//! and a value. The query-string transport encodes it as a
//! `name_operator_value` token (several of them comma-separated); the JSON
//! transport carries an array of `{name, operator, value}` objects, which
//! is the only way to compare against non-string values.

use std::fmt;

use serde_json::Value;

use crate::error::InvalidRequest;

/// The seven recognized comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    Like,
}

impl Operator {
    /// Resolves one of the seven short operator tokens.
    pub fn parse(token: &str) -> Option<Operator> {
        match token {
            "eq" => Some(Operator::Eq),
            "neq" => Some(Operator::Neq),
            "gt" => Some(Operator::Gt),
            "gteq" => Some(Operator::Gteq),
            "lt" => Some(Operator::Lt),
            "lteq" => Some(Operator::Lteq),
            "like" => Some(Operator::Like),
            _ => None,
        }
    }

    /// The short token of this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Gteq => "gteq",
            Operator::Lt => "lt",
            Operator::Lteq => "lteq",
            Operator::Like => "like",
        }
    }
}

/// Which variable family an expression filters on; only changes the
/// wording of the unknown-comparator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScope {
    /// Plain variables (`variables`, `taskVariables`).
    Variable,
    /// Process-level variables on the task endpoint (`processVariables`).
    ProcessVariable,
}

impl fmt::Display for VariableScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableScope::Variable => write!(f, "variable"),
            VariableScope::ProcessVariable => write!(f, "process variable"),
        }
    }
}

/// One parsed variable comparison, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpression {
    pub name: String,
    pub operator: Operator,
    pub value: Value,
}

/// Parses one `name_operator_value` token.
///
/// The token splits on the first two underscores: everything before the
/// first underscore is the name, the segment between the first and second
/// underscore is the operator, the remainder (which may itself contain
/// underscores) is the value. Fewer than three segments is a malformed
/// expression; an unrecognized middle segment is an unknown operator.
pub fn parse_expression(
    token: &str,
    scope: VariableScope,
) -> Result<VariableExpression, InvalidRequest> {
    let mut segments = token.splitn(3, '_');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(name), Some(operator_token), Some(value)) => {
            let operator =
                Operator::parse(operator_token).ok_or_else(|| InvalidRequest::UnknownOperator {
                    scope,
                    token: operator_token.to_string(),
                })?;
            Ok(VariableExpression {
                name: name.to_string(),
                operator,
                value: Value::String(value.to_string()),
            })
        }
        _ => Err(InvalidRequest::MalformedExpression),
    }
}

/// Parses a comma-separated list of `name_operator_value` tokens.
///
/// Expressions are parsed independently; the first failure fails the
/// whole request.
pub fn parse_expression_list(
    raw: &str,
    scope: VariableScope,
) -> Result<Vec<VariableExpression>, InvalidRequest> {
    raw.split(',')
        .map(|token| parse_expression(token, scope))
        .collect()
}

/// Decodes the structured (JSON body) form: an ordered array of
/// `{name, operator, value}` objects.
pub fn from_json_items(
    items: &[Value],
    scope: VariableScope,
) -> Result<Vec<VariableExpression>, InvalidRequest> {
    items
        .iter()
        .map(|item| {
            let object = item.as_object().ok_or(InvalidRequest::MalformedExpression)?;
            let name = object
                .get("name")
                .and_then(Value::as_str)
                .ok_or(InvalidRequest::MalformedExpression)?;
            let operator_token = object
                .get("operator")
                .and_then(Value::as_str)
                .ok_or(InvalidRequest::MalformedExpression)?;
            let operator =
                Operator::parse(operator_token).ok_or_else(|| InvalidRequest::UnknownOperator {
                    scope,
                    token: operator_token.to_string(),
                })?;
            Ok(VariableExpression {
                name: name.to_string(),
                operator,
                value: object.get("value").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_all_seven_operators() {
        for (token, operator) in [
            ("eq", Operator::Eq),
            ("neq", Operator::Neq),
            ("gt", Operator::Gt),
            ("gteq", Operator::Gteq),
            ("lt", Operator::Lt),
            ("lteq", Operator::Lteq),
            ("like", Operator::Like),
        ] {
            let expression =
                parse_expression(&format!("aVariable_{token}_aValue"), VariableScope::Variable)
                    .unwrap();
            assert_eq!(expression.name, "aVariable");
            assert_eq!(expression.operator, operator);
            assert_eq!(expression.value, json!("aValue"));
        }
    }

    #[test]
    fn test_value_keeps_its_underscores() {
        let expression =
            parse_expression("aVariable_eq_a_value_with_underscores", VariableScope::Variable)
                .unwrap();
        assert_eq!(expression.value, json!("a_value_with_underscores"));
    }

    #[test]
    fn test_operatorless_token_is_malformed() {
        let err =
            parse_expression("invalidFormattedVariableQuery", VariableScope::Variable).unwrap_err();
        assert_eq!(err, InvalidRequest::MalformedExpression);
    }

    #[test]
    fn test_unknown_operator_is_reported_with_token() {
        let err = parse_expression("aVariable_anInvalidComparator_aValue", VariableScope::Variable)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid variable comparator specified: anInvalidComparator"
        );
    }

    #[test]
    fn test_process_variable_scope_changes_wording() {
        let err = parse_expression("aVariable_xx_aValue", VariableScope::ProcessVariable)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid process variable comparator specified: xx"
        );
    }

    #[test]
    fn test_comma_separated_expressions_parse_independently() {
        let expressions =
            parse_expression_list("a_eq_1,b_like_x%", VariableScope::Variable).unwrap();
        assert_eq!(expressions.len(), 2);
        assert_eq!(expressions[0].operator, Operator::Eq);
        assert_eq!(expressions[1].operator, Operator::Like);

        assert!(parse_expression_list("a_eq_1,malformed", VariableScope::Variable).is_err());
    }

    #[test]
    fn test_structured_form_keeps_native_value_types() {
        let items = vec![json!({"name": "amount", "operator": "gteq", "value": 5})];
        let expressions = from_json_items(&items, VariableScope::Variable).unwrap();
        assert_eq!(expressions[0].value, json!(5));
    }

    #[test]
    fn test_structured_form_without_operator_is_malformed() {
        let items = vec![json!({"name": "amount", "value": 5})];
        let err = from_json_items(&items, VariableScope::Variable).unwrap_err();
        assert_eq!(err, InvalidRequest::MalformedExpression);
    }
}
