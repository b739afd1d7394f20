//! Query builder for historic case instances.

use chrono::{DateTime, FixedOffset};

use super::{HistoryQuery, VariableValue};
use crate::entities::HistoricCaseInstance;
use crate::error::EngineResult;

/// Builder for queries over historic case instances.
pub trait HistoricCaseInstanceQuery: HistoryQuery<Item = HistoricCaseInstance> {
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_instance_ids(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn case_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn case_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn case_definition_key_not_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn case_definition_name(&mut self, name: String) -> EngineResult<()>;
    fn case_definition_name_like(&mut self, name: String) -> EngineResult<()>;
    fn case_instance_business_key(&mut self, key: String) -> EngineResult<()>;
    fn case_instance_business_key_like(&mut self, key: String) -> EngineResult<()>;
    fn case_activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn created_by(&mut self, user_id: String) -> EngineResult<()>;
    fn super_case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn sub_case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn super_process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn sub_process_instance_id(&mut self, id: String) -> EngineResult<()>;

    fn created_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn created_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn closed_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn closed_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    fn active(&mut self) -> EngineResult<()>;
    fn completed(&mut self) -> EngineResult<()>;
    fn terminated(&mut self) -> EngineResult<()>;
    fn closed(&mut self) -> EngineResult<()>;
    fn not_closed(&mut self) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

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

    fn order_by_case_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_case_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_case_instance_business_key(&mut self) -> EngineResult<()>;
    fn order_by_case_instance_create_time(&mut self) -> EngineResult<()>;
    fn order_by_case_instance_close_time(&mut self) -> EngineResult<()>;
    fn order_by_case_instance_duration(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
