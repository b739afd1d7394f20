//! Tables for the historic process instance endpoint.

use flowtrace_engine::entities::HistoricProcessInstance;
use flowtrace_engine::query::HistoricProcessInstanceQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter, VariableOps};
use crate::params::ParameterMap;
use crate::sort::SortMapping;
use crate::variables::VariableScope;

type Query = dyn HistoricProcessInstanceQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
    },
    FieldMapping {
        name: "processInstanceIds",
        setter: Setter::StringList(|q, v| q.process_instance_ids(v)),
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
        name: "processDefinitionKeyIn",
        setter: Setter::StringList(|q, v| q.process_definition_key_in(v)),
    },
    FieldMapping {
        name: "processDefinitionName",
        setter: Setter::String(|q, v| q.process_definition_name(v)),
    },
    FieldMapping {
        name: "processDefinitionNameLike",
        setter: Setter::String(|q, v| q.process_definition_name_like(v)),
    },
    FieldMapping {
        name: "processDefinitionKeyNotIn",
        setter: Setter::StringList(|q, v| q.process_definition_key_not_in(v)),
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
        name: "rootProcessInstances",
        setter: Setter::Flag(|q| q.root_process_instances()),
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
        name: "withIncidents",
        setter: Setter::Flag(|q| q.with_incidents()),
    },
    FieldMapping {
        name: "withRootIncidents",
        setter: Setter::Flag(|q| q.with_root_incidents()),
    },
    FieldMapping {
        name: "incidentStatus",
        setter: Setter::String(|q, v| q.incident_status(v)),
    },
    FieldMapping {
        name: "incidentType",
        setter: Setter::String(|q, v| q.incident_type(v)),
    },
    FieldMapping {
        name: "incidentMessage",
        setter: Setter::String(|q, v| q.incident_message(v)),
    },
    FieldMapping {
        name: "incidentMessageLike",
        setter: Setter::String(|q, v| q.incident_message_like(v)),
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
        name: "startedBy",
        setter: Setter::String(|q, v| q.started_by(v)),
    },
    FieldMapping {
        name: "superProcessInstanceId",
        setter: Setter::String(|q, v| q.super_process_instance_id(v)),
    },
    FieldMapping {
        name: "subProcessInstanceId",
        setter: Setter::String(|q, v| q.sub_process_instance_id(v)),
    },
    FieldMapping {
        name: "superCaseInstanceId",
        setter: Setter::String(|q, v| q.super_case_instance_id(v)),
    },
    FieldMapping {
        name: "subCaseInstanceId",
        setter: Setter::String(|q, v| q.sub_case_instance_id(v)),
    },
    FieldMapping {
        name: "caseInstanceId",
        setter: Setter::String(|q, v| q.case_instance_id(v)),
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
        name: "variableNamesIgnoreCase",
        setter: Setter::Flag(|q| q.match_variable_names_ignore_case()),
    },
    FieldMapping {
        name: "variableValuesIgnoreCase",
        setter: Setter::Flag(|q| q.match_variable_values_ignore_case()),
    },
    FieldMapping {
        name: "variables",
        setter: Setter::Variables(VariableOps {
            scope: VariableScope::Variable,
            eq: |q, n, v| q.variable_value_equals(n, v),
            neq: |q, n, v| q.variable_value_not_equals(n, v),
            gt: |q, n, v| q.variable_value_greater_than(n, v),
            gteq: |q, n, v| q.variable_value_greater_than_or_equal(n, v),
            lt: |q, n, v| q.variable_value_less_than(n, v),
            lteq: |q, n, v| q.variable_value_less_than_or_equal(n, v),
            like: |q, n, v| q.variable_value_like(n, v),
        }),
    },
    FieldMapping {
        name: "executedActivityAfter",
        setter: Setter::Date(|q, v| q.executed_activity_after(v)),
    },
    FieldMapping {
        name: "executedActivityBefore",
        setter: Setter::Date(|q, v| q.executed_activity_before(v)),
    },
    FieldMapping {
        name: "executedActivityIdIn",
        setter: Setter::StringList(|q, v| q.executed_activity_id_in(v)),
    },
    FieldMapping {
        name: "activeActivityIdIn",
        setter: Setter::StringList(|q, v| q.active_activity_id_in(v)),
    },
    FieldMapping {
        name: "executedJobAfter",
        setter: Setter::Date(|q, v| q.executed_job_after(v)),
    },
    FieldMapping {
        name: "executedJobBefore",
        setter: Setter::Date(|q, v| q.executed_job_before(v)),
    },
    FieldMapping {
        name: "active",
        setter: Setter::Flag(|q| q.active()),
    },
    FieldMapping {
        name: "suspended",
        setter: Setter::Flag(|q| q.suspended()),
    },
    FieldMapping {
        name: "completed",
        setter: Setter::Flag(|q| q.completed()),
    },
    FieldMapping {
        name: "externallyTerminated",
        setter: Setter::Flag(|q| q.externally_terminated()),
    },
    FieldMapping {
        name: "internallyTerminated",
        setter: Setter::Flag(|q| q.internally_terminated()),
    },
];

/// Sort-key table.
pub const SORT_KEYS: &[SortMapping<Query>] = &[
    SortMapping {
        key: "instanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "definitionId",
        order_by: |q| q.order_by_process_definition_id(),
    },
    SortMapping {
        key: "definitionKey",
        order_by: |q| q.order_by_process_definition_key(),
    },
    SortMapping {
        key: "definitionName",
        order_by: |q| q.order_by_process_definition_name(),
    },
    SortMapping {
        key: "definitionVersion",
        order_by: |q| q.order_by_process_definition_version(),
    },
    SortMapping {
        key: "businessKey",
        order_by: |q| q.order_by_process_instance_business_key(),
    },
    SortMapping {
        key: "startTime",
        order_by: |q| q.order_by_process_instance_start_time(),
    },
    SortMapping {
        key: "endTime",
        order_by: |q| q.order_by_process_instance_end_time(),
    },
    SortMapping {
        key: "duration",
        order_by: |q| q.order_by_process_instance_duration(),
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
) -> Result<Vec<HistoricProcessInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
