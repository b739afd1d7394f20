//! The capability interface through which the history engine is consumed.
//!
//! One [`HistoryService`] lives for the lifetime of the server; every
//! request asks it for a fresh query builder, drives the builder through
//! a sequence of filter/sort calls, executes one terminal operation, and
//! discards it. Builders are never shared across requests.

use crate::entities::{HistoricProcessInstance, HistoricVariableInstance};
use crate::error::EngineResult;
use crate::query::{
    HistoricActivityInstanceQuery, HistoricCaseInstanceQuery, HistoricDecisionInstanceQuery,
    HistoricDetailQuery, HistoricIncidentQuery, HistoricJobLogQuery, HistoricProcessInstanceQuery,
    HistoricTaskInstanceQuery, HistoricVariableInstanceQuery,
};

/// Factory for history query builders plus the singleton lookups of the
/// history API.
pub trait HistoryService: Send + Sync {
    fn create_historic_process_instance_query(
        &self,
    ) -> Box<dyn HistoricProcessInstanceQuery + Send>;

    fn create_historic_activity_instance_query(
        &self,
    ) -> Box<dyn HistoricActivityInstanceQuery + Send>;

    fn create_historic_case_instance_query(&self) -> Box<dyn HistoricCaseInstanceQuery + Send>;

    fn create_historic_decision_instance_query(
        &self,
    ) -> Box<dyn HistoricDecisionInstanceQuery + Send>;

    fn create_historic_detail_query(&self) -> Box<dyn HistoricDetailQuery + Send>;

    fn create_historic_incident_query(&self) -> Box<dyn HistoricIncidentQuery + Send>;

    fn create_historic_job_log_query(&self) -> Box<dyn HistoricJobLogQuery + Send>;

    fn create_historic_task_instance_query(&self) -> Box<dyn HistoricTaskInstanceQuery + Send>;

    fn create_historic_variable_instance_query(
        &self,
    ) -> Box<dyn HistoricVariableInstanceQuery + Send>;

    /// Looks up one historic process instance by id.
    fn historic_process_instance(
        &self,
        id: &str,
    ) -> EngineResult<Option<HistoricProcessInstance>>;

    /// Looks up one historic variable instance by id.
    ///
    /// `deserialize_value` mirrors the query-level toggle: when false,
    /// object values are returned in their serialized representation.
    fn historic_variable_instance(
        &self,
        id: &str,
        deserialize_value: bool,
    ) -> EngineResult<Option<HistoricVariableInstance>>;
}
