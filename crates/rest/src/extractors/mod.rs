//! Axum extractors for history query requests.
//!
//! Both extractors produce the same transport-agnostic
//! [`ParameterMap`](flowtrace_query::ParameterMap); everything after
//! extraction is shared between the GET and POST forms of an endpoint.

mod body;
mod query_string;

pub use body::QueryDocument;
pub use query_string::QueryString;
