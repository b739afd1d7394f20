//! Tables for the historic activity instance endpoint.

use flowtrace_engine::entities::HistoricActivityInstance;
use flowtrace_engine::query::HistoricActivityInstanceQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::ParameterMap;
use crate::sort::SortMapping;

type Query = dyn HistoricActivityInstanceQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "activityInstanceId",
        setter: Setter::String(|q, v| q.activity_instance_id(v)),
    },
    FieldMapping {
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
    },
    FieldMapping {
        name: "processDefinitionId",
        setter: Setter::String(|q, v| q.process_definition_id(v)),
    },
    FieldMapping {
        name: "executionId",
        setter: Setter::String(|q, v| q.execution_id(v)),
    },
    FieldMapping {
        name: "activityId",
        setter: Setter::String(|q, v| q.activity_id(v)),
    },
    FieldMapping {
        name: "activityName",
        setter: Setter::String(|q, v| q.activity_name(v)),
    },
    FieldMapping {
        name: "activityType",
        setter: Setter::String(|q, v| q.activity_type(v)),
    },
    FieldMapping {
        name: "taskAssignee",
        setter: Setter::String(|q, v| q.task_assignee(v)),
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
        name: "canceled",
        setter: Setter::Flag(|q| q.canceled()),
    },
    FieldMapping {
        name: "completeScope",
        setter: Setter::Flag(|q| q.complete_scope()),
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
        name: "tenantIdIn",
        setter: Setter::StringList(|q, v| q.tenant_id_in(v)),
    },
    FieldMapping {
        name: "withoutTenantId",
        setter: Setter::Flag(|q| q.without_tenant_id()),
    },
];

/// Sort-key table.
pub const SORT_KEYS: &[SortMapping<Query>] = &[
    SortMapping {
        key: "activityInstanceId",
        order_by: |q| q.order_by_historic_activity_instance_id(),
    },
    SortMapping {
        key: "instanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "executionId",
        order_by: |q| q.order_by_execution_id(),
    },
    SortMapping {
        key: "activityId",
        order_by: |q| q.order_by_activity_id(),
    },
    SortMapping {
        key: "activityName",
        order_by: |q| q.order_by_activity_name(),
    },
    SortMapping {
        key: "activityType",
        order_by: |q| q.order_by_activity_type(),
    },
    SortMapping {
        key: "startTime",
        order_by: |q| q.order_by_historic_activity_instance_start_time(),
    },
    SortMapping {
        key: "endTime",
        order_by: |q| q.order_by_historic_activity_instance_end_time(),
    },
    SortMapping {
        key: "duration",
        order_by: |q| q.order_by_historic_activity_instance_duration(),
    },
    SortMapping {
        key: "definitionId",
        order_by: |q| q.order_by_process_definition_id(),
    },
    SortMapping {
        key: "occurrence",
        order_by: |q| q.order_partially_by_occurrence(),
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
) -> Result<Vec<HistoricActivityInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
