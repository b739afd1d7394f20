//! JSON body extractor.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use flowtrace_query::ParameterMap;
use serde_json::Value;

use crate::error::RestError;

/// Extracts the [`ParameterMap`] of a POST query request from its JSON
/// body.
///
/// An absent or `null` body is a request without parameters. Malformed
/// JSON is a generic bad request; a body that is valid JSON but not an
/// object is rejected as well.
#[derive(Debug)]
pub struct QueryDocument(pub ParameterMap);

impl<S> FromRequest<S> for QueryDocument
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = Option::<Json<Value>>::from_request(req, state)
            .await
            .map_err(|_| RestError::bad_request("Invalid JSON request body"))?;

        let params = match payload {
            None | Some(Json(Value::Null)) => ParameterMap::new(),
            Some(Json(Value::Object(object))) => ParameterMap::from_json_object(object),
            Some(Json(_)) => {
                return Err(RestError::bad_request("Request body must be a JSON object"));
            }
        };
        Ok(QueryDocument(params))
    }
}
