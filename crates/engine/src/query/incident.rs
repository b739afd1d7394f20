//! Query builder for historic incidents.

use chrono::{DateTime, FixedOffset};

use super::HistoryQuery;
use crate::entities::HistoricIncident;
use crate::error::EngineResult;

/// Builder for queries over historic incidents.
pub trait HistoricIncidentQuery: HistoryQuery<Item = HistoricIncident> {
    fn incident_id(&mut self, id: String) -> EngineResult<()>;
    fn incident_type(&mut self, incident_type: String) -> EngineResult<()>;
    fn incident_message(&mut self, message: String) -> EngineResult<()>;
    fn incident_message_like(&mut self, message: String) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn process_definition_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn execution_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_id(&mut self, id: String) -> EngineResult<()>;
    fn failed_activity_id(&mut self, id: String) -> EngineResult<()>;
    fn cause_incident_id(&mut self, id: String) -> EngineResult<()>;
    fn root_cause_incident_id(&mut self, id: String) -> EngineResult<()>;
    fn configuration(&mut self, configuration: String) -> EngineResult<()>;
    fn history_configuration(&mut self, configuration: String) -> EngineResult<()>;
    fn job_definition_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;

    fn create_time_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn create_time_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn end_time_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn end_time_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    fn open(&mut self) -> EngineResult<()>;
    fn deleted(&mut self) -> EngineResult<()>;
    fn resolved(&mut self) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn order_by_incident_id(&mut self) -> EngineResult<()>;
    fn order_by_incident_message(&mut self) -> EngineResult<()>;
    fn order_by_create_time(&mut self) -> EngineResult<()>;
    fn order_by_end_time(&mut self) -> EngineResult<()>;
    fn order_by_incident_type(&mut self) -> EngineResult<()>;
    fn order_by_execution_id(&mut self) -> EngineResult<()>;
    fn order_by_activity_id(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_key(&mut self) -> EngineResult<()>;
    fn order_by_cause_incident_id(&mut self) -> EngineResult<()>;
    fn order_by_root_cause_incident_id(&mut self) -> EngineResult<()>;
    fn order_by_configuration(&mut self) -> EngineResult<()>;
    fn order_by_incident_state(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
