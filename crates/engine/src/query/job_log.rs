//! Query builder for historic job logs.

use super::HistoryQuery;
use crate::entities::HistoricJobLog;
use crate::error::EngineResult;

/// Builder for queries over historic job log entries.
pub trait HistoricJobLogQuery: HistoryQuery<Item = HistoricJobLog> {
    fn log_id(&mut self, id: String) -> EngineResult<()>;
    fn job_id(&mut self, id: String) -> EngineResult<()>;
    fn job_exception_message(&mut self, message: String) -> EngineResult<()>;
    fn job_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn job_definition_type(&mut self, job_type: String) -> EngineResult<()>;
    fn job_definition_configuration(&mut self, configuration: String) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn deployment_id(&mut self, id: String) -> EngineResult<()>;

    fn activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn execution_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn job_priority_higher_than_or_equals(&mut self, priority: i64) -> EngineResult<()>;
    fn job_priority_lower_than_or_equals(&mut self, priority: i64) -> EngineResult<()>;

    fn creation_log(&mut self) -> EngineResult<()>;
    fn failure_log(&mut self) -> EngineResult<()>;
    fn success_log(&mut self) -> EngineResult<()>;
    fn deletion_log(&mut self) -> EngineResult<()>;

    fn order_by_timestamp(&mut self) -> EngineResult<()>;
    fn order_by_job_id(&mut self) -> EngineResult<()>;
    fn order_by_job_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_job_due_date(&mut self) -> EngineResult<()>;
    fn order_by_job_retries(&mut self) -> EngineResult<()>;
    fn order_by_job_priority(&mut self) -> EngineResult<()>;
    fn order_by_activity_id(&mut self) -> EngineResult<()>;
    fn order_by_execution_id(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_key(&mut self) -> EngineResult<()>;
    fn order_by_deployment_id(&mut self) -> EngineResult<()>;
    /// Orders by the engine's partial occurrence ordering.
    fn order_partially_by_occurrence(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
