//! # flowtrace-query - Request-to-Query-Builder Translation
//!
//! This crate turns one HTTP request (filter criteria, sort criteria and
//! pagination, delivered as URL query parameters or as a JSON body) into
//! an ordered sequence of calls on a history engine query builder, then
//! materializes a list, a page, or a count.
//!
//! ## Pipeline
//!
//! 1. [`params::ParameterMap`]: the transport-agnostic parameter map;
//!    the only place where the two transports differ.
//! 2. [`fields`]: the declarative filter dispatcher, driven by one
//!    static parameter table per endpoint ([`endpoints`]).
//! 3. [`variables`]: the `name_operator_value` expression grammar and
//!    its structured JSON twin.
//! 4. [`sort`]: validation and application of sort specifications with
//!    primary/secondary precedence.
//! 5. [`execute`]: the result materializer, choosing `count()`, `list()` or
//!    `list_page(first, max)` plus pre-fetch toggles.
//!
//! ## Guarantees
//!
//! - A GET request and a POST request with logically equivalent
//!   parameters drive an identical ordered builder-call sequence.
//! - Validation failures reject the request *before* the first builder
//!   call; there is no partial application.
//! - Unknown parameter names are ignored; unknown sort keys, unknown
//!   variable comparators, incomplete sort pairs, and unparsable dates
//!   are client errors with fixed message texts ([`error::InvalidRequest`]).

#![warn(rustdoc::missing_crate_level_docs)]

pub mod dates;
pub mod endpoints;
pub mod error;
pub mod execute;
pub mod fields;
pub mod pagination;
pub mod params;
pub mod sort;
pub mod variables;

pub use error::{InvalidRequest, QueryError};
pub use execute::QueryDescriptor;
pub use pagination::PaginationWindow;
pub use params::{ParameterMap, RawValue};
pub use sort::{SortCriterion, SortOrder};
pub use variables::{Operator, VariableExpression, VariableScope};
