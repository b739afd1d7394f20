//! Sort specification processing.
//!
//! Two entry points feed one validation core: the simple
//! `sortBy`/`sortOrder` parameter pair, and the structured `sorting` list
//! of the JSON transport. All criteria are resolved against the
//! endpoint's sort-key table *before* the first builder call, so a
//! rejected specification never leaves a partially applied ordering.

use flowtrace_engine::EngineResult;
use flowtrace_engine::query::HistoryQuery;

use crate::error::{InvalidRequest, QueryError};
use crate::params::ParameterMap;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses `asc`/`desc`.
    pub fn parse(value: &str) -> Result<SortOrder, InvalidRequest> {
        match value {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(InvalidRequest::InvalidSortDirection(other.to_string())),
        }
    }
}

/// One `(sortBy, sortOrder)` pair. A request carries an ordered sequence
/// of them; earlier criteria take precedence in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterion {
    pub sort_by: String,
    pub sort_order: SortOrder,
}

/// Table entry resolving one sort key to its `order_by_*` operation.
pub struct SortMapping<Q: ?Sized> {
    /// The wire-level sort key.
    pub key: &'static str,
    /// The builder operation selecting that ordering.
    pub order_by: fn(&mut Q) -> EngineResult<()>,
}

/// Extracts the request's sort criteria, in order.
///
/// The structured `sorting` list takes precedence over the simple pair.
/// Supplying exactly one of `sortBy`/`sortOrder` is invalid for the whole
/// request, regardless of which one is present.
pub fn collect_criteria(params: &ParameterMap) -> Result<Vec<SortCriterion>, InvalidRequest> {
    if let Some(raw) = params.get("sorting") {
        return raw.sort_criteria();
    }
    match (params.get("sortBy"), params.get("sortOrder")) {
        (None, None) => Ok(Vec::new()),
        (Some(sort_by), Some(sort_order)) => Ok(vec![SortCriterion {
            sort_by: sort_by.string("sortBy")?,
            sort_order: SortOrder::parse(&sort_order.string("sortOrder")?)?,
        }]),
        _ => Err(InvalidRequest::IncompleteSortSpecification),
    }
}

/// Validates and applies the request's sort specification.
///
/// For criterion *i* the sequence is `order_by_x()` then `asc()`/`desc()`,
/// before criterion *i+1* is touched; the engine derives primary and
/// secondary precedence from that call order.
pub fn apply_sorting<Q>(
    params: &ParameterMap,
    table: &[SortMapping<Q>],
    query: &mut Q,
) -> Result<(), QueryError>
where
    Q: HistoryQuery + ?Sized,
{
    let criteria = collect_criteria(params)?;

    let mut resolved = Vec::with_capacity(criteria.len());
    for criterion in &criteria {
        let mapping = table
            .iter()
            .find(|mapping| mapping.key == criterion.sort_by)
            .ok_or_else(|| InvalidRequest::UnknownSortKey(criterion.sort_by.clone()))?;
        resolved.push((mapping.order_by, criterion.sort_order));
    }

    for (order_by, direction) in resolved {
        order_by(query)?;
        match direction {
            SortOrder::Asc => query.asc()?,
            SortOrder::Desc => query.desc()?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_parameters_is_no_criteria() {
        assert!(collect_criteria(&ParameterMap::new()).unwrap().is_empty());
    }

    #[test]
    fn test_pair_yields_single_criterion() {
        let params =
            ParameterMap::from_query_pairs([("sortBy", "startTime"), ("sortOrder", "desc")]);
        let criteria = collect_criteria(&params).unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].sort_by, "startTime");
        assert_eq!(criteria[0].sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_lone_sort_by_is_incomplete() {
        let params = ParameterMap::from_query_pairs([("sortBy", "startTime")]);
        assert_eq!(
            collect_criteria(&params).unwrap_err(),
            InvalidRequest::IncompleteSortSpecification
        );
    }

    #[test]
    fn test_lone_sort_order_is_incomplete() {
        let params = ParameterMap::from_query_pairs([("sortOrder", "asc")]);
        assert_eq!(
            collect_criteria(&params).unwrap_err(),
            InvalidRequest::IncompleteSortSpecification
        );
    }

    #[test]
    fn test_invalid_direction() {
        let params =
            ParameterMap::from_query_pairs([("sortBy", "startTime"), ("sortOrder", "sideways")]);
        assert_eq!(
            collect_criteria(&params).unwrap_err(),
            InvalidRequest::InvalidSortDirection("sideways".to_string())
        );
    }

    #[test]
    fn test_structured_list_takes_precedence_and_keeps_order() {
        let body = json!({
            "sortBy": "ignored",
            "sortOrder": "asc",
            "sorting": [
                {"sortBy": "businessKey", "sortOrder": "desc"},
                {"sortBy": "closeTime", "sortOrder": "asc"}
            ]
        });
        let serde_json::Value::Object(object) = body else {
            unreachable!()
        };
        let criteria = collect_criteria(&ParameterMap::from_json_object(object)).unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].sort_by, "businessKey");
        assert_eq!(criteria[0].sort_order, SortOrder::Desc);
        assert_eq!(criteria[1].sort_by, "closeTime");
        assert_eq!(criteria[1].sort_order, SortOrder::Asc);
    }
}
