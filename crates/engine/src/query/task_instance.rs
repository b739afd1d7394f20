//! Query builder for historic task instances.

use chrono::{DateTime, FixedOffset};

use super::{HistoryQuery, VariableValue};
use crate::entities::HistoricTaskInstance;
use crate::error::EngineResult;

/// Builder for queries over historic task instances.
///
/// This is the widest builder of the history API. Task-local and
/// process-level variable filters are distinct method families; both are
/// affected by the ignore-case toggles.
pub trait HistoricTaskInstanceQuery: HistoryQuery<Item = HistoricTaskInstance> {
    fn task_id(&mut self, id: String) -> EngineResult<()>;
    fn task_parent_task_id(&mut self, id: String) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn process_instance_business_key(&mut self, key: String) -> EngineResult<()>;
    fn process_instance_business_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn process_instance_business_key_like(&mut self, key: String) -> EngineResult<()>;
    fn execution_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn process_definition_name(&mut self, name: String) -> EngineResult<()>;
    fn task_name(&mut self, name: String) -> EngineResult<()>;
    fn task_name_like(&mut self, name: String) -> EngineResult<()>;
    fn task_description(&mut self, description: String) -> EngineResult<()>;
    fn task_description_like(&mut self, description: String) -> EngineResult<()>;
    fn task_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn task_definition_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn task_delete_reason(&mut self, reason: String) -> EngineResult<()>;
    fn task_delete_reason_like(&mut self, reason: String) -> EngineResult<()>;
    fn task_assignee(&mut self, assignee: String) -> EngineResult<()>;
    fn task_assignee_like(&mut self, assignee: String) -> EngineResult<()>;
    fn task_owner(&mut self, owner: String) -> EngineResult<()>;
    fn task_owner_like(&mut self, owner: String) -> EngineResult<()>;
    fn task_involved_user(&mut self, user_id: String) -> EngineResult<()>;
    fn task_involved_group(&mut self, group_id: String) -> EngineResult<()>;
    fn task_had_candidate_user(&mut self, user_id: String) -> EngineResult<()>;
    fn task_had_candidate_group(&mut self, group_id: String) -> EngineResult<()>;
    fn case_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn case_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn case_definition_name(&mut self, name: String) -> EngineResult<()>;
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_execution_id(&mut self, id: String) -> EngineResult<()>;

    /// Filters on exact task priority.
    fn task_priority(&mut self, priority: i64) -> EngineResult<()>;

    fn task_assigned(&mut self) -> EngineResult<()>;
    fn task_unassigned(&mut self) -> EngineResult<()>;
    fn finished(&mut self) -> EngineResult<()>;
    fn unfinished(&mut self) -> EngineResult<()>;
    fn process_finished(&mut self) -> EngineResult<()>;
    fn process_unfinished(&mut self) -> EngineResult<()>;
    fn with_candidate_groups(&mut self) -> EngineResult<()>;
    fn without_candidate_groups(&mut self) -> EngineResult<()>;
    fn without_task_due_date(&mut self) -> EngineResult<()>;

    fn task_due_date(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn task_due_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn task_due_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn task_follow_up_date(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn task_follow_up_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn task_follow_up_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn started_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn started_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn match_variable_names_ignore_case(&mut self) -> EngineResult<()>;
    fn match_variable_values_ignore_case(&mut self) -> EngineResult<()>;

    fn task_variable_value_equals(&mut self, name: String, value: VariableValue)
    -> EngineResult<()>;
    fn task_variable_value_not_equals(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn task_variable_value_greater_than(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn task_variable_value_greater_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn task_variable_value_less_than(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn task_variable_value_less_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn task_variable_value_like(&mut self, name: String, value: VariableValue) -> EngineResult<()>;

    fn process_variable_value_equals(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_not_equals(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_greater_than(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_greater_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_less_than(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_less_than_or_equal(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;
    fn process_variable_value_like(
        &mut self,
        name: String,
        value: VariableValue,
    ) -> EngineResult<()>;

    fn order_by_task_id(&mut self) -> EngineResult<()>;
    fn order_by_historic_activity_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_execution_id(&mut self) -> EngineResult<()>;
    fn order_by_historic_task_instance_duration(&mut self) -> EngineResult<()>;
    fn order_by_historic_task_instance_end_time(&mut self) -> EngineResult<()>;
    fn order_by_historic_task_instance_start_time(&mut self) -> EngineResult<()>;
    fn order_by_task_name(&mut self) -> EngineResult<()>;
    fn order_by_task_description(&mut self) -> EngineResult<()>;
    fn order_by_task_assignee(&mut self) -> EngineResult<()>;
    fn order_by_task_owner(&mut self) -> EngineResult<()>;
    fn order_by_task_due_date(&mut self) -> EngineResult<()>;
    fn order_by_task_follow_up_date(&mut self) -> EngineResult<()>;
    fn order_by_delete_reason(&mut self) -> EngineResult<()>;
    fn order_by_task_definition_key(&mut self) -> EngineResult<()>;
    fn order_by_task_priority(&mut self) -> EngineResult<()>;
    fn order_by_case_definition_id(&mut self) -> EngineResult<()>;
    fn order_by_case_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_case_execution_id(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
