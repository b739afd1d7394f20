//! The transport-agnostic parameter map.
//!
//! Both transports, URL query parameters and JSON request bodies, are
//! normalized here into one `name -> raw value` map. Everything downstream
//! (filter dispatch, sorting, pagination) coerces values through
//! [`RawValue`] and never learns which transport a request used, which is
//! what makes GET/POST equivalence cheap to guarantee.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::dates::parse_history_date;
use crate::error::InvalidRequest;
use crate::sort::{SortCriterion, SortOrder};
use crate::variables::{self, VariableExpression, VariableScope};

/// One raw parameter value, still in its transport representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Query-string transport: always a string.
    Text(String),
    /// JSON-body transport: native JSON value.
    Json(Value),
}

impl RawValue {
    /// Coerces to a single string.
    pub fn string(&self, parameter: &str) -> Result<String, InvalidRequest> {
        match self {
            RawValue::Text(text) => Ok(text.clone()),
            RawValue::Json(Value::String(text)) => Ok(text.clone()),
            RawValue::Json(Value::Number(number)) => Ok(number.to_string()),
            RawValue::Json(Value::Bool(flag)) => Ok(flag.to_string()),
            RawValue::Json(_) => Err(InvalidRequest::invalid_value(
                parameter,
                "expected a string value",
            )),
        }
    }

    /// Coerces to a string list.
    ///
    /// Query-string values split on commas; JSON arrays keep their
    /// elements. A JSON string splits on commas as well, so both
    /// transports resolve `"a,b"` and `["a","b"]` to the same list.
    pub fn string_list(&self, parameter: &str) -> Result<Vec<String>, InvalidRequest> {
        match self {
            RawValue::Text(text) => Ok(split_comma_list(text)),
            RawValue::Json(Value::String(text)) => Ok(split_comma_list(text)),
            RawValue::Json(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text.clone()),
                    Value::Number(number) => Ok(number.to_string()),
                    _ => Err(InvalidRequest::invalid_value(
                        parameter,
                        "expected an array of strings",
                    )),
                })
                .collect(),
            RawValue::Json(_) => Err(InvalidRequest::invalid_value(
                parameter,
                "expected a string list",
            )),
        }
    }

    /// Coerces to a boolean. Only the literals `true` and `false` are
    /// accepted on the string transport.
    pub fn boolean(&self, parameter: &str) -> Result<bool, InvalidRequest> {
        let text = match self {
            RawValue::Json(Value::Bool(flag)) => return Ok(*flag),
            RawValue::Json(Value::String(text)) => text.as_str(),
            RawValue::Text(text) => text.as_str(),
            RawValue::Json(_) => {
                return Err(InvalidRequest::invalid_value(
                    parameter,
                    "expected a boolean value",
                ));
            }
        };
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(InvalidRequest::invalid_value(
                parameter,
                format!("cannot convert \"{other}\" to a boolean"),
            )),
        }
    }

    /// Coerces to a signed 64-bit integer.
    pub fn i64(&self, parameter: &str) -> Result<i64, InvalidRequest> {
        match self {
            RawValue::Text(text) => parse_integer(parameter, text),
            RawValue::Json(Value::Number(number)) => number.as_i64().ok_or_else(|| {
                InvalidRequest::invalid_value(parameter, "expected an integer value")
            }),
            RawValue::Json(Value::String(text)) => parse_integer(parameter, text),
            RawValue::Json(_) => Err(InvalidRequest::invalid_value(
                parameter,
                "expected an integer value",
            )),
        }
    }

    /// Coerces to a signed 32-bit integer (pagination bounds).
    pub fn i32(&self, parameter: &str) -> Result<i32, InvalidRequest> {
        let wide = self.i64(parameter)?;
        i32::try_from(wide).map_err(|_| {
            InvalidRequest::invalid_value(parameter, "value out of range for an integer")
        })
    }

    /// Coerces to an engine timestamp.
    pub fn date(&self, parameter: &str) -> Result<DateTime<FixedOffset>, InvalidRequest> {
        let text = match self {
            RawValue::Text(text) => text,
            RawValue::Json(Value::String(text)) => text,
            RawValue::Json(other) => {
                return Err(InvalidRequest::UnparsableDate {
                    parameter: parameter.to_string(),
                    value: other.to_string(),
                });
            }
        };
        parse_history_date(parameter, text)
    }

    /// Coerces to a list of variable expressions.
    pub fn variable_expressions(
        &self,
        parameter: &str,
        scope: VariableScope,
    ) -> Result<Vec<VariableExpression>, InvalidRequest> {
        match self {
            RawValue::Text(text) => variables::parse_expression_list(text, scope),
            RawValue::Json(Value::String(text)) => variables::parse_expression_list(text, scope),
            RawValue::Json(Value::Array(items)) => variables::from_json_items(items, scope),
            RawValue::Json(_) => Err(InvalidRequest::invalid_value(
                parameter,
                "expected an array of {name, operator, value} objects",
            )),
        }
    }

    /// Decodes the structured `sorting` list (JSON transport only).
    pub fn sort_criteria(&self) -> Result<Vec<SortCriterion>, InvalidRequest> {
        let items = match self {
            RawValue::Json(Value::Array(items)) => items,
            RawValue::Json(Value::Null) => return Ok(Vec::new()),
            RawValue::Text(_) => {
                return Err(InvalidRequest::invalid_value(
                    "sorting",
                    "only supported in JSON request bodies",
                ));
            }
            RawValue::Json(_) => {
                return Err(InvalidRequest::invalid_value(
                    "sorting",
                    "expected an array of {sortBy, sortOrder} objects",
                ));
            }
        };
        items
            .iter()
            .map(|item| {
                let object = item
                    .as_object()
                    .ok_or(InvalidRequest::IncompleteSortSpecification)?;
                let sort_by = object.get("sortBy").and_then(Value::as_str);
                let sort_order = object.get("sortOrder").and_then(Value::as_str);
                match (sort_by, sort_order) {
                    (Some(sort_by), Some(sort_order)) => Ok(SortCriterion {
                        sort_by: sort_by.to_string(),
                        sort_order: SortOrder::parse(sort_order)?,
                    }),
                    _ => Err(InvalidRequest::IncompleteSortSpecification),
                }
            })
            .collect()
    }
}

fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',').map(str::to_string).collect()
}

fn parse_integer(parameter: &str, text: &str) -> Result<i64, InvalidRequest> {
    text.parse().map_err(|_| {
        InvalidRequest::invalid_value(parameter, format!("cannot convert \"{text}\" to an integer"))
    })
}

/// The normalized parameters of one request. Built once, immutable after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: HashMap<String, RawValue>,
}

impl ParameterMap {
    /// Creates an empty map (a request without parameters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from decoded query-string pairs.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), RawValue::Text(value.into())))
                .collect(),
        }
    }

    /// Builds the map from a JSON request body.
    ///
    /// Explicit `null` members are dropped: a field set to null behaves
    /// exactly like an absent field.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        Self {
            entries: object
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(name, value)| (name, RawValue::Json(value)))
                .collect(),
        }
    }

    /// Looks up one parameter.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.entries.get(name)
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the request carried no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `deserializeValues` toggle; defaults to true when absent.
    pub fn deserialize_values(&self) -> Result<bool, InvalidRequest> {
        match self.get("deserializeValues") {
            Some(raw) => raw.boolean("deserializeValues"),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(value: &str) -> RawValue {
        RawValue::Text(value.to_string())
    }

    #[test]
    fn test_both_transports_yield_the_same_list() {
        let from_text = text("a,b").string_list("tenantIdIn").unwrap();
        let from_json = RawValue::Json(json!(["a", "b"]))
            .string_list("tenantIdIn")
            .unwrap();
        assert_eq!(from_text, from_json);
    }

    #[test]
    fn test_boolean_is_strict() {
        assert!(text("true").boolean("finished").unwrap());
        assert!(!text("false").boolean("finished").unwrap());
        assert!(text("banana").boolean("finished").is_err());
        assert!(RawValue::Json(json!(true)).boolean("finished").unwrap());
    }

    #[test]
    fn test_number_accepts_both_encodings() {
        assert_eq!(text("5").i64("jobPriorityLowerThanOrEquals").unwrap(), 5);
        assert_eq!(
            RawValue::Json(json!(5)).i64("jobPriorityLowerThanOrEquals").unwrap(),
            5
        );
        assert!(text("high").i64("jobPriorityLowerThanOrEquals").is_err());
    }

    #[test]
    fn test_i32_range_check() {
        let err = text("4294967296").i32("firstResult").unwrap_err();
        assert!(err.to_string().contains("firstResult"));
    }

    #[test]
    fn test_date_wrong_json_type_is_unparsable() {
        let err = RawValue::Json(json!(42)).date("startedBefore").unwrap_err();
        assert!(matches!(err, InvalidRequest::UnparsableDate { .. }));
    }

    #[test]
    fn test_null_body_members_are_absent() {
        let object = json!({"finished": null, "processDefinitionKey": "invoice"});
        let Value::Object(object) = object else {
            unreachable!()
        };
        let map = ParameterMap::from_json_object(object);
        assert!(!map.contains("finished"));
        assert!(map.contains("processDefinitionKey"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_deserialize_values_defaults_to_true() {
        let map = ParameterMap::new();
        assert!(map.deserialize_values().unwrap());

        let map = ParameterMap::from_query_pairs([("deserializeValues", "false")]);
        assert!(!map.deserialize_values().unwrap());
    }

    #[test]
    fn test_sorting_is_rejected_on_the_query_string() {
        let err = text("[]").sort_criteria().unwrap_err();
        assert!(matches!(err, InvalidRequest::InvalidParameterValue { .. }));
    }

    #[test]
    fn test_sort_criteria_require_both_members() {
        let raw = RawValue::Json(json!([{"sortBy": "startTime"}]));
        assert_eq!(
            raw.sort_criteria().unwrap_err(),
            InvalidRequest::IncompleteSortSpecification
        );

        let raw = RawValue::Json(json!([{"sortBy": "startTime", "sortOrder": "desc"}]));
        let criteria = raw.sort_criteria().unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].sort_by, "startTime");
        assert_eq!(criteria[0].sort_order, SortOrder::Desc);
    }
}
