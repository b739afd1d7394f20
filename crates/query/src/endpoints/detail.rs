//! Tables for the historic detail endpoint.
//!
//! Details carry potentially large, lazily materialized variable values:
//! binary fetching is suppressed on every list request, and
//! `deserializeValues=false` additionally suppresses custom object
//! deserialization.

use flowtrace_engine::entities::HistoricDetail;
use flowtrace_engine::query::HistoricDetailQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::ParameterMap;
use crate::sort::SortMapping;

type Query = dyn HistoricDetailQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
    },
    FieldMapping {
        name: "processInstanceIdIn",
        setter: Setter::StringList(|q, v| q.process_instance_id_in(v)),
    },
    FieldMapping {
        name: "executionId",
        setter: Setter::String(|q, v| q.execution_id(v)),
    },
    FieldMapping {
        name: "activityInstanceId",
        setter: Setter::String(|q, v| q.activity_instance_id(v)),
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
        name: "taskId",
        setter: Setter::String(|q, v| q.task_id(v)),
    },
    FieldMapping {
        name: "variableInstanceId",
        setter: Setter::String(|q, v| q.variable_instance_id(v)),
    },
    FieldMapping {
        name: "variableTypeIn",
        setter: Setter::StringList(|q, v| q.variable_type_in(v)),
    },
    FieldMapping {
        name: "userOperationId",
        setter: Setter::String(|q, v| q.user_operation_id(v)),
    },
    FieldMapping {
        name: "variableUpdates",
        setter: Setter::Flag(|q| q.variable_updates()),
    },
    FieldMapping {
        name: "formFields",
        setter: Setter::Flag(|q| q.form_fields()),
    },
    FieldMapping {
        name: "excludeTaskDetails",
        setter: Setter::Flag(|q| q.exclude_task_details()),
    },
    FieldMapping {
        name: "occurredBefore",
        setter: Setter::Date(|q, v| q.occurred_before(v)),
    },
    FieldMapping {
        name: "occurredAfter",
        setter: Setter::Date(|q, v| q.occurred_after(v)),
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
        key: "processInstanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "variableName",
        order_by: |q| q.order_by_variable_name(),
    },
    SortMapping {
        key: "variableType",
        order_by: |q| q.order_by_variable_type(),
    },
    SortMapping {
        key: "variableRevision",
        order_by: |q| q.order_by_variable_revision(),
    },
    SortMapping {
        key: "formPropertyId",
        order_by: |q| q.order_by_form_property_id(),
    },
    SortMapping {
        key: "time",
        order_by: |q| q.order_by_time(),
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
    disable_binary_fetching: Some(|q| q.disable_binary_fetching()),
    disable_custom_object_deserialization: Some(|q| q.disable_custom_object_deserialization()),
};

/// Translates `params` onto `query` and materializes a list or page.
pub fn list(params: &ParameterMap, query: &mut Query) -> Result<Vec<HistoricDetail>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
