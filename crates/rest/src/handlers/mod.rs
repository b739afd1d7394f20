//! HTTP request handlers, one module per history endpoint.
//!
//! Every endpoint exposes the same four operations (GET and POST for the
//! result list, GET and POST for the count) plus, where the API defines
//! one, a singleton lookup by id. The GET and POST forms of an operation
//! share one execution path over the transport-agnostic parameter map.

pub mod activity_instance;
pub mod case_instance;
pub mod decision_instance;
pub mod detail;
pub mod health;
pub mod incident;
pub mod job_log;
pub mod process_instance;
pub mod task_instance;
pub mod variable_instance;
