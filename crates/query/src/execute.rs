//! The result materializer.
//!
//! Once filters and sort criteria are applied, exactly one terminal
//! operation runs: `count()` for count requests, `list()` when no
//! pagination parameter was supplied, `list_page(first, max)` otherwise.
//! Endpoint-scoped pre-fetch toggles fire between dispatch and the
//! terminal operation, and never on count requests.

use flowtrace_engine::EngineResult;
use flowtrace_engine::query::HistoryQuery;

use crate::error::QueryError;
use crate::fields::{FieldMapping, apply_filters};
use crate::pagination::PaginationWindow;
use crate::params::ParameterMap;
use crate::sort::{SortMapping, apply_sorting};

/// Everything the generic executor needs to know about one endpoint.
pub struct QueryDescriptor<Q: ?Sized + 'static> {
    /// Parameter table, walked in order by the filter dispatcher.
    pub fields: &'static [FieldMapping<Q>],
    /// Sort-key table.
    pub sort_keys: &'static [SortMapping<Q>],
    /// Set for endpoints returning lazily materialized binary values;
    /// invoked before every list/page terminal operation.
    pub disable_binary_fetching: Option<fn(&mut Q) -> EngineResult<()>>,
    /// Set for endpoints honoring `deserializeValues=false`.
    pub disable_custom_object_deserialization: Option<fn(&mut Q) -> EngineResult<()>>,
}

impl<Q: HistoryQuery + ?Sized> QueryDescriptor<Q> {
    fn apply(&self, params: &ParameterMap, query: &mut Q) -> Result<(), QueryError> {
        apply_filters(params, self.fields, query)?;
        apply_sorting(params, self.sort_keys, query)
    }
}

/// Applies the request to `query` and materializes a list or page.
pub fn list<Q>(
    descriptor: &QueryDescriptor<Q>,
    params: &ParameterMap,
    query: &mut Q,
) -> Result<Vec<Q::Item>, QueryError>
where
    Q: HistoryQuery + ?Sized,
{
    descriptor.apply(params, query)?;

    if let Some(disable) = descriptor.disable_binary_fetching {
        disable(query)?;
    }
    if let Some(disable) = descriptor.disable_custom_object_deserialization {
        if !params.deserialize_values()? {
            disable(query)?;
        }
    }

    let records = match PaginationWindow::from_params(params)? {
        None => query.list()?,
        Some(window) => query.list_page(window.first_result, window.max_results)?,
    };
    Ok(records)
}

/// Applies the request to `query` and materializes the match count.
pub fn count<Q>(
    descriptor: &QueryDescriptor<Q>,
    params: &ParameterMap,
    query: &mut Q,
) -> Result<i64, QueryError>
where
    Q: HistoryQuery + ?Sized,
{
    descriptor.apply(params, query)?;
    Ok(query.count()?)
}
