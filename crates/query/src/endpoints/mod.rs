//! Per-endpoint descriptor tables.
//!
//! Every endpoint of the history API is described by two tables (a
//! parameter table and a sort-key table) over that endpoint's builder
//! trait, plus a [`QueryDescriptor`](crate::execute::QueryDescriptor)
//! tying them to the endpoint's pre-fetch toggles. The dispatch algorithm
//! lives once in [`fields`](crate::fields), [`sort`](crate::sort) and
//! [`execute`](crate::execute); adding an endpoint means adding table
//! entries, not code.

pub mod activity_instance;
pub mod case_instance;
pub mod decision_instance;
pub mod detail;
pub mod incident;
pub mod job_log;
pub mod process_instance;
pub mod task_instance;
pub mod variable_instance;
