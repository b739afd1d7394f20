//! Tables for the historic task instance endpoint.
//!
//! The widest table of the API. Task-local variable filters
//! (`taskVariables`) and process-level variable filters
//! (`processVariables`) are separate parameters with separate operator
//! families; the latter reports unknown comparators with the
//! process-variable wording.

use flowtrace_engine::entities::HistoricTaskInstance;
use flowtrace_engine::query::HistoricTaskInstanceQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter, VariableOps};
use crate::params::ParameterMap;
use crate::sort::SortMapping;
use crate::variables::VariableScope;

type Query = dyn HistoricTaskInstanceQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "taskId",
        setter: Setter::String(|q, v| q.task_id(v)),
    },
    FieldMapping {
        name: "taskParentTaskId",
        setter: Setter::String(|q, v| q.task_parent_task_id(v)),
    },
    FieldMapping {
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
    },
    FieldMapping {
        name: "processInstanceBusinessKey",
        setter: Setter::String(|q, v| q.process_instance_business_key(v)),
    },
    FieldMapping {
        name: "processInstanceBusinessKeyIn",
        setter: Setter::StringList(|q, v| q.process_instance_business_key_in(v)),
    },
    FieldMapping {
        name: "processInstanceBusinessKeyLike",
        setter: Setter::String(|q, v| q.process_instance_business_key_like(v)),
    },
    FieldMapping {
        name: "executionId",
        setter: Setter::String(|q, v| q.execution_id(v)),
    },
    FieldMapping {
        name: "activityInstanceIdIn",
        setter: Setter::StringList(|q, v| q.activity_instance_id_in(v)),
    },
    FieldMapping {
        name: "processDefinitionId",
        setter: Setter::String(|q, v| q.process_definition_id(v)),
    },
    FieldMapping {
        name: "processDefinitionKey",
        setter: Setter::String(|q, v| q.process_definition_key(v)),
    },
    FieldMapping {
        name: "processDefinitionName",
        setter: Setter::String(|q, v| q.process_definition_name(v)),
    },
    FieldMapping {
        name: "taskName",
        setter: Setter::String(|q, v| q.task_name(v)),
    },
    FieldMapping {
        name: "taskNameLike",
        setter: Setter::String(|q, v| q.task_name_like(v)),
    },
    FieldMapping {
        name: "taskDescription",
        setter: Setter::String(|q, v| q.task_description(v)),
    },
    FieldMapping {
        name: "taskDescriptionLike",
        setter: Setter::String(|q, v| q.task_description_like(v)),
    },
    FieldMapping {
        name: "taskDefinitionKey",
        setter: Setter::String(|q, v| q.task_definition_key(v)),
    },
    FieldMapping {
        name: "taskDefinitionKeyIn",
        setter: Setter::StringList(|q, v| q.task_definition_key_in(v)),
    },
    FieldMapping {
        name: "taskDeleteReason",
        setter: Setter::String(|q, v| q.task_delete_reason(v)),
    },
    FieldMapping {
        name: "taskDeleteReasonLike",
        setter: Setter::String(|q, v| q.task_delete_reason_like(v)),
    },
    FieldMapping {
        name: "assigned",
        setter: Setter::Flag(|q| q.task_assigned()),
    },
    FieldMapping {
        name: "unassigned",
        setter: Setter::Flag(|q| q.task_unassigned()),
    },
    FieldMapping {
        name: "taskAssignee",
        setter: Setter::String(|q, v| q.task_assignee(v)),
    },
    FieldMapping {
        name: "taskAssigneeLike",
        setter: Setter::String(|q, v| q.task_assignee_like(v)),
    },
    FieldMapping {
        name: "taskOwner",
        setter: Setter::String(|q, v| q.task_owner(v)),
    },
    FieldMapping {
        name: "taskOwnerLike",
        setter: Setter::String(|q, v| q.task_owner_like(v)),
    },
    FieldMapping {
        name: "taskPriority",
        setter: Setter::Number(|q, v| q.task_priority(v)),
    },
    FieldMapping {
        name: "finished",
        setter: Setter::Flag(|q| q.finished()),
    },
    FieldMapping {
        name: "unfinished",
        setter: Setter::Flag(|q| q.unfinished()),
    },
    FieldMapping {
        name: "processFinished",
        setter: Setter::Flag(|q| q.process_finished()),
    },
    FieldMapping {
        name: "processUnfinished",
        setter: Setter::Flag(|q| q.process_unfinished()),
    },
    FieldMapping {
        name: "taskDueDate",
        setter: Setter::Date(|q, v| q.task_due_date(v)),
    },
    FieldMapping {
        name: "taskDueDateBefore",
        setter: Setter::Date(|q, v| q.task_due_before(v)),
    },
    FieldMapping {
        name: "taskDueDateAfter",
        setter: Setter::Date(|q, v| q.task_due_after(v)),
    },
    FieldMapping {
        name: "withoutTaskDueDate",
        setter: Setter::Flag(|q| q.without_task_due_date()),
    },
    FieldMapping {
        name: "taskFollowUpDate",
        setter: Setter::Date(|q, v| q.task_follow_up_date(v)),
    },
    FieldMapping {
        name: "taskFollowUpDateBefore",
        setter: Setter::Date(|q, v| q.task_follow_up_before(v)),
    },
    FieldMapping {
        name: "taskFollowUpDateAfter",
        setter: Setter::Date(|q, v| q.task_follow_up_after(v)),
    },
    FieldMapping {
        name: "startedBefore",
        setter: Setter::Date(|q, v| q.started_before(v)),
    },
    FieldMapping {
        name: "startedAfter",
        setter: Setter::Date(|q, v| q.started_after(v)),
    },
    FieldMapping {
        name: "finishedBefore",
        setter: Setter::Date(|q, v| q.finished_before(v)),
    },
    FieldMapping {
        name: "finishedAfter",
        setter: Setter::Date(|q, v| q.finished_after(v)),
    },
    FieldMapping {
        name: "variableNamesIgnoreCase",
        setter: Setter::Flag(|q| q.match_variable_names_ignore_case()),
    },
    FieldMapping {
        name: "variableValuesIgnoreCase",
        setter: Setter::Flag(|q| q.match_variable_values_ignore_case()),
    },
    FieldMapping {
        name: "taskVariables",
        setter: Setter::Variables(VariableOps {
            scope: VariableScope::Variable,
            eq: |q, n, v| q.task_variable_value_equals(n, v),
            neq: |q, n, v| q.task_variable_value_not_equals(n, v),
            gt: |q, n, v| q.task_variable_value_greater_than(n, v),
            gteq: |q, n, v| q.task_variable_value_greater_than_or_equal(n, v),
            lt: |q, n, v| q.task_variable_value_less_than(n, v),
            lteq: |q, n, v| q.task_variable_value_less_than_or_equal(n, v),
            like: |q, n, v| q.task_variable_value_like(n, v),
        }),
    },
    FieldMapping {
        name: "processVariables",
        setter: Setter::Variables(VariableOps {
            scope: VariableScope::ProcessVariable,
            eq: |q, n, v| q.process_variable_value_equals(n, v),
            neq: |q, n, v| q.process_variable_value_not_equals(n, v),
            gt: |q, n, v| q.process_variable_value_greater_than(n, v),
            gteq: |q, n, v| q.process_variable_value_greater_than_or_equal(n, v),
            lt: |q, n, v| q.process_variable_value_less_than(n, v),
            lteq: |q, n, v| q.process_variable_value_less_than_or_equal(n, v),
            like: |q, n, v| q.process_variable_value_like(n, v),
        }),
    },
    FieldMapping {
        name: "caseDefinitionId",
        setter: Setter::String(|q, v| q.case_definition_id(v)),
    },
    FieldMapping {
        name: "caseDefinitionKey",
        setter: Setter::String(|q, v| q.case_definition_key(v)),
    },
    FieldMapping {
        name: "caseDefinitionName",
        setter: Setter::String(|q, v| q.case_definition_name(v)),
    },
    FieldMapping {
        name: "caseInstanceId",
        setter: Setter::String(|q, v| q.case_instance_id(v)),
    },
    FieldMapping {
        name: "caseExecutionId",
        setter: Setter::String(|q, v| q.case_execution_id(v)),
    },
    FieldMapping {
        name: "tenantIdIn",
        setter: Setter::StringList(|q, v| q.tenant_id_in(v)),
    },
    FieldMapping {
        name: "withoutTenantId",
        setter: Setter::Flag(|q| q.without_tenant_id()),
    },
    FieldMapping {
        name: "taskInvolvedUser",
        setter: Setter::String(|q, v| q.task_involved_user(v)),
    },
    FieldMapping {
        name: "taskInvolvedGroup",
        setter: Setter::String(|q, v| q.task_involved_group(v)),
    },
    FieldMapping {
        name: "taskHadCandidateUser",
        setter: Setter::String(|q, v| q.task_had_candidate_user(v)),
    },
    FieldMapping {
        name: "taskHadCandidateGroup",
        setter: Setter::String(|q, v| q.task_had_candidate_group(v)),
    },
    FieldMapping {
        name: "withCandidateGroups",
        setter: Setter::Flag(|q| q.with_candidate_groups()),
    },
    FieldMapping {
        name: "withoutCandidateGroups",
        setter: Setter::Flag(|q| q.without_candidate_groups()),
    },
];

/// Sort-key table.
pub const SORT_KEYS: &[SortMapping<Query>] = &[
    SortMapping {
        key: "taskId",
        order_by: |q| q.order_by_task_id(),
    },
    SortMapping {
        key: "activityInstanceId",
        order_by: |q| q.order_by_historic_activity_instance_id(),
    },
    SortMapping {
        key: "processDefinitionId",
        order_by: |q| q.order_by_process_definition_id(),
    },
    SortMapping {
        key: "processInstanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "executionId",
        order_by: |q| q.order_by_execution_id(),
    },
    SortMapping {
        key: "duration",
        order_by: |q| q.order_by_historic_task_instance_duration(),
    },
    SortMapping {
        key: "endTime",
        order_by: |q| q.order_by_historic_task_instance_end_time(),
    },
    SortMapping {
        key: "startTime",
        order_by: |q| q.order_by_historic_task_instance_start_time(),
    },
    SortMapping {
        key: "taskName",
        order_by: |q| q.order_by_task_name(),
    },
    SortMapping {
        key: "taskDescription",
        order_by: |q| q.order_by_task_description(),
    },
    SortMapping {
        key: "assignee",
        order_by: |q| q.order_by_task_assignee(),
    },
    SortMapping {
        key: "owner",
        order_by: |q| q.order_by_task_owner(),
    },
    SortMapping {
        key: "dueDate",
        order_by: |q| q.order_by_task_due_date(),
    },
    SortMapping {
        key: "followUpDate",
        order_by: |q| q.order_by_task_follow_up_date(),
    },
    SortMapping {
        key: "deleteReason",
        order_by: |q| q.order_by_delete_reason(),
    },
    SortMapping {
        key: "taskDefinitionKey",
        order_by: |q| q.order_by_task_definition_key(),
    },
    SortMapping {
        key: "priority",
        order_by: |q| q.order_by_task_priority(),
    },
    SortMapping {
        key: "caseDefinitionId",
        order_by: |q| q.order_by_case_definition_id(),
    },
    SortMapping {
        key: "caseInstanceId",
        order_by: |q| q.order_by_case_instance_id(),
    },
    SortMapping {
        key: "caseExecutionId",
        order_by: |q| q.order_by_case_execution_id(),
    },
    SortMapping {
        key: "tenantId",
        order_by: |q| q.order_by_tenant_id(),
    },
];

/// Descriptor tying the tables together.
pub static DESCRIPTOR: QueryDescriptor<Query> = QueryDescriptor {
    fields: FIELDS,
    sort_keys: SORT_KEYS,
    disable_binary_fetching: None,
    disable_custom_object_deserialization: None,
};

/// Translates `params` onto `query` and materializes a list or page.
pub fn list(
    params: &ParameterMap,
    query: &mut Query,
) -> Result<Vec<HistoricTaskInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
