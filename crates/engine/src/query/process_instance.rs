//! Query builder for historic process instances.

use chrono::{DateTime, FixedOffset};

use super::{HistoryQuery, VariableValue};
use crate::entities::HistoricProcessInstance;
use crate::error::EngineResult;

/// Builder for queries over historic process instances.
pub trait HistoricProcessInstanceQuery: HistoryQuery<Item = HistoricProcessInstance> {
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn process_instance_ids(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn process_definition_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn process_definition_key_not_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn process_definition_name(&mut self, name: String) -> EngineResult<()>;
    fn process_definition_name_like(&mut self, name: String) -> EngineResult<()>;
    fn process_instance_business_key(&mut self, key: String) -> EngineResult<()>;
    fn process_instance_business_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn process_instance_business_key_like(&mut self, key: String) -> EngineResult<()>;
    fn started_by(&mut self, user_id: String) -> EngineResult<()>;
    fn super_process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn sub_process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn super_case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn sub_case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn incident_type(&mut self, incident_type: String) -> EngineResult<()>;
    fn incident_status(&mut self, status: String) -> EngineResult<()>;
    fn incident_message(&mut self, message: String) -> EngineResult<()>;
    fn incident_message_like(&mut self, message: String) -> EngineResult<()>;

    fn started_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn started_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn executed_activity_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn executed_activity_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn executed_job_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn executed_job_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    fn executed_activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn active_activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    /// Restricts to top-level instances (no super process or case instance).
    fn root_process_instances(&mut self) -> EngineResult<()>;
    fn finished(&mut self) -> EngineResult<()>;
    fn unfinished(&mut self) -> EngineResult<()>;
    fn with_incidents(&mut self) -> EngineResult<()>;
    fn with_root_incidents(&mut self) -> EngineResult<()>;
    fn active(&mut self) -> EngineResult<()>;
    fn suspended(&mut self) -> EngineResult<()>;
    fn completed(&mut self) -> EngineResult<()>;
    fn externally_terminated(&mut self) -> EngineResult<()>;
    fn internally_terminated(&mut self) -> EngineResult<()>;

    fn match_variable_names_ignore_case(&mut self) -> EngineResult<()>;
    fn match_variable_values_ignore_case(&mut self) -> EngineResult<()>;
    fn variable_value_equals(&mut self, name: String, value: VariableValue) -> EngineResult<()>;
    fn variable_value_not_equals(&mut self, name: String, value: VariableValue) -> EngineResult<()>;
    fn variable_value_greater_than(&mut self, name: String, value: VariableValue)
    -> EngineResult<()>;
    fn variable_value_greater_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn variable_value_less_than(&mut self, name: String, value: VariableValue) -> EngineResult<()>;
    fn variable_value_less_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn variable_value_like(&mut self, name: String, value: VariableValue) -> EngineResult<()>;

    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_key(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_name(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_version(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_business_key(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_start_time(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_end_time(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_duration(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
