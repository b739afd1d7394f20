//! # flowtrace-engine - History Engine Interface
//!
//! This crate defines the boundary between the Flowtrace history API and
//! the workflow engine that owns the historic data. It contains no query
//! execution logic of its own; it fixes three things:
//!
//! - the **record types** the history API serves ([`entities`]),
//! - the **query-builder traits** the engine must implement, one per
//!   endpoint ([`query`]): stateful, request-scoped objects that collect
//!   filter and ordering calls and expose the terminal operations
//!   `list`, `list_page` and `count`,
//! - the **service trait** through which builders are obtained
//!   ([`service::HistoryService`]).
//!
//! The REST layer never sees an engine implementation type; it drives
//! boxed trait objects handed out by the service.
//!
//! ## Test support
//!
//! With the `test-support` feature, [`recording`] provides call-recording
//! implementations of every builder trait and an in-memory
//! `RecordingHistoryService`. Tests use them to assert the exact ordered
//! sequence of builder calls a request produces.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod query;
#[cfg(feature = "test-support")]
pub mod recording;
pub mod service;

pub use error::{EngineError, EngineResult};
pub use service::HistoryService;
