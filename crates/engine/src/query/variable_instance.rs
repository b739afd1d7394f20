//! Query builder for historic variable instances.

use super::{HistoryQuery, VariableValue};
use crate::entities::HistoricVariableInstance;
use crate::error::EngineResult;

/// Builder for queries over historic variable instances.
pub trait HistoricVariableInstanceQuery: HistoryQuery<Item = HistoricVariableInstance> {
    fn variable_name(&mut self, name: String) -> EngineResult<()>;
    fn variable_name_like(&mut self, name: String) -> EngineResult<()>;
    fn variable_name_in(&mut self, names: Vec<String>) -> EngineResult<()>;
    fn variable_type_in(&mut self, type_names: Vec<String>) -> EngineResult<()>;
    fn variable_value_equals(&mut self, name: String, value: VariableValue) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn process_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn execution_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_execution_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn case_activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn activity_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn task_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    /// Also returns variables that were deleted during execution.
    fn include_deleted(&mut self) -> EngineResult<()>;
    fn match_variable_names_ignore_case(&mut self) -> EngineResult<()>;
    fn match_variable_values_ignore_case(&mut self) -> EngineResult<()>;

    /// Skips fetching byte-array variable values.
    fn disable_binary_fetching(&mut self) -> EngineResult<()>;
    /// Returns serialized object values instead of deserializing them.
    fn disable_custom_object_deserialization(&mut self) -> EngineResult<()>;

    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_variable_name(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
