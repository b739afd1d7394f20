//! Query builder for historic details (variable updates and form fields).

use chrono::{DateTime, FixedOffset};

use super::HistoryQuery;
use crate::entities::HistoricDetail;
use crate::error::EngineResult;

/// Builder for queries over historic details.
pub trait HistoricDetailQuery: HistoryQuery<Item = HistoricDetail> {
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn execution_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_execution_id(&mut self, id: String) -> EngineResult<()>;
    fn task_id(&mut self, id: String) -> EngineResult<()>;
    fn variable_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn user_operation_id(&mut self, id: String) -> EngineResult<()>;

    fn process_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn variable_type_in(&mut self, type_names: Vec<String>) -> EngineResult<()>;
    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn occurred_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn occurred_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    /// Restricts to variable updates.
    fn variable_updates(&mut self) -> EngineResult<()>;
    /// Restricts to form-field submissions.
    fn form_fields(&mut self) -> EngineResult<()>;
    /// Excludes details that belong to a task.
    fn exclude_task_details(&mut self) -> EngineResult<()>;

    /// Skips fetching byte-array variable values.
    fn disable_binary_fetching(&mut self) -> EngineResult<()>;
    /// Returns serialized object values instead of deserializing them.
    fn disable_custom_object_deserialization(&mut self) -> EngineResult<()>;

    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_variable_name(&mut self) -> EngineResult<()>;
    fn order_by_variable_type(&mut self) -> EngineResult<()>;
    fn order_by_variable_revision(&mut self) -> EngineResult<()>;
    fn order_by_form_property_id(&mut self) -> EngineResult<()>;
    fn order_by_time(&mut self) -> EngineResult<()>;
    /// Orders by the engine's partial occurrence ordering.
    fn order_partially_by_occurrence(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
