//! Application state for the history REST API.
//!
//! The shared state available to all request handlers: the history
//! engine and the server configuration.

use std::sync::Arc;

use flowtrace_engine::HistoryService;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `E` - The history engine type (must implement [`HistoryService`])
///
/// # Example
///
/// ```rust,ignore
/// use flowtrace_rest::{AppState, ServerConfig};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(engine), ServerConfig::default());
/// ```
pub struct AppState<E> {
    /// The history engine.
    engine: Arc<E>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since E is wrapped in Arc and doesn't need to
// be Clone itself.
impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E: HistoryService> AppState<E> {
    /// Creates a new `AppState` with the given engine and configuration.
    pub fn new(engine: Arc<E>, config: ServerConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the history engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns a clone of the engine Arc.
    pub fn engine_arc(&self) -> Arc<E> {
        Arc::clone(&self.engine)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowtrace_engine::entities::{HistoricProcessInstance, HistoricVariableInstance};
    use flowtrace_engine::error::EngineResult;
    use flowtrace_engine::query::{
        HistoricActivityInstanceQuery, HistoricCaseInstanceQuery, HistoricDecisionInstanceQuery,
        HistoricDetailQuery, HistoricIncidentQuery, HistoricJobLogQuery,
        HistoricProcessInstanceQuery, HistoricTaskInstanceQuery, HistoricVariableInstanceQuery,
    };

    // Minimal engine stub; builders are never requested in these tests.
    struct StubEngine;

    impl HistoryService for StubEngine {
        fn create_historic_process_instance_query(
            &self,
        ) -> Box<dyn HistoricProcessInstanceQuery + Send> {
            unimplemented!()
        }

        fn create_historic_activity_instance_query(
            &self,
        ) -> Box<dyn HistoricActivityInstanceQuery + Send> {
            unimplemented!()
        }

        fn create_historic_case_instance_query(&self) -> Box<dyn HistoricCaseInstanceQuery + Send> {
            unimplemented!()
        }

        fn create_historic_decision_instance_query(
            &self,
        ) -> Box<dyn HistoricDecisionInstanceQuery + Send> {
            unimplemented!()
        }

        fn create_historic_detail_query(&self) -> Box<dyn HistoricDetailQuery + Send> {
            unimplemented!()
        }

        fn create_historic_incident_query(&self) -> Box<dyn HistoricIncidentQuery + Send> {
            unimplemented!()
        }

        fn create_historic_job_log_query(&self) -> Box<dyn HistoricJobLogQuery + Send> {
            unimplemented!()
        }

        fn create_historic_task_instance_query(&self) -> Box<dyn HistoricTaskInstanceQuery + Send> {
            unimplemented!()
        }

        fn create_historic_variable_instance_query(
            &self,
        ) -> Box<dyn HistoricVariableInstanceQuery + Send> {
            unimplemented!()
        }

        fn historic_process_instance(
            &self,
            _id: &str,
        ) -> EngineResult<Option<HistoricProcessInstance>> {
            Ok(None)
        }

        fn historic_variable_instance(
            &self,
            _id: &str,
            _deserialize_value: bool,
        ) -> EngineResult<Option<HistoricVariableInstance>> {
            Ok(None)
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(StubEngine), ServerConfig::default());
        assert_eq!(state.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_app_state_clone_shares_engine() {
        let state = AppState::new(Arc::new(StubEngine), ServerConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.engine_arc(), &cloned.engine_arc()));
    }
}
