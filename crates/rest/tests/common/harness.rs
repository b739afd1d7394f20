//! REST API test harness.
//!
//! Wires the history routes to a call-recording engine so tests can make
//! real HTTP requests and assert both the response payloads and the
//! exact builder-call sequences they produced.

use std::sync::Arc;

use axum_test::TestServer;
use flowtrace_engine::recording::{Call, Fixtures, RecordingHistoryService};
use flowtrace_rest::{AppState, ServerConfig};

/// Test harness for the history REST API.
///
/// # Example
///
/// ```rust,ignore
/// let harness = HistoryTestHarness::new();
/// let response = harness.server.get("/history/process-instance").await;
/// assert_eq!(response.status_code(), 200);
/// assert_eq!(harness.methods(), vec!["list"]);
/// ```
pub struct HistoryTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The recording engine behind the server.
    pub engine: RecordingHistoryService,
}

impl HistoryTestHarness {
    /// Creates a harness over an engine without canned records.
    pub fn new() -> Self {
        Self::with_fixtures(Fixtures::default())
    }

    /// Creates a harness over an engine serving `fixtures`.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        let engine = RecordingHistoryService::with_fixtures(fixtures);
        let state = AppState::new(Arc::new(engine.clone()), ServerConfig::for_testing());
        let app = flowtrace_rest::routing::history_routes::create_routes(state);
        let server = TestServer::new(app).expect("failed to create test server");

        Self { server, engine }
    }

    /// Recorded builder-method names, in call order.
    pub fn methods(&self) -> Vec<&'static str> {
        self.engine.recorder().log().method_names()
    }

    /// Recorded builder calls with their arguments.
    pub fn calls(&self) -> Vec<Call> {
        self.engine.calls()
    }

    /// Discards recorded calls between requests of one test.
    pub fn clear(&self) {
        self.engine.recorder().log().clear();
    }
}
