//! Query-string extractor.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use flowtrace_query::ParameterMap;

use crate::error::RestError;

/// Extracts the [`ParameterMap`] of a GET request from its query string.
///
/// Values stay strings at this point; typed coercion (lists, dates,
/// booleans, numbers) happens in the translation layer so that both
/// transports behave identically.
///
/// # Example
///
/// ```rust,ignore
/// use flowtrace_rest::extractors::QueryString;
///
/// async fn handler(QueryString(params): QueryString) {
///     assert!(params.contains("processDefinitionKey"));
/// }
/// ```
#[derive(Debug)]
pub struct QueryString(pub ParameterMap);

impl<S> FromRequestParts<S> for QueryString
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::bad_request("Invalid query parameters"))?;

        Ok(QueryString(ParameterMap::from_query_pairs(pairs)))
    }
}
