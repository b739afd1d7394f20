//! Tables for the historic job log endpoint.

use flowtrace_engine::entities::HistoricJobLog;
use flowtrace_engine::query::HistoricJobLogQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::ParameterMap;
use crate::sort::SortMapping;

type Query = dyn HistoricJobLogQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "logId",
        setter: Setter::String(|q, v| q.log_id(v)),
    },
    FieldMapping {
        name: "jobId",
        setter: Setter::String(|q, v| q.job_id(v)),
    },
    FieldMapping {
        name: "jobExceptionMessage",
        setter: Setter::String(|q, v| q.job_exception_message(v)),
    },
    FieldMapping {
        name: "jobDefinitionId",
        setter: Setter::String(|q, v| q.job_definition_id(v)),
    },
    FieldMapping {
        name: "jobDefinitionType",
        setter: Setter::String(|q, v| q.job_definition_type(v)),
    },
    FieldMapping {
        name: "jobDefinitionConfiguration",
        setter: Setter::String(|q, v| q.job_definition_configuration(v)),
    },
    FieldMapping {
        name: "activityIdIn",
        setter: Setter::StringList(|q, v| q.activity_id_in(v)),
    },
    FieldMapping {
        name: "executionIdIn",
        setter: Setter::StringList(|q, v| q.execution_id_in(v)),
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
        name: "processDefinitionKey",
        setter: Setter::String(|q, v| q.process_definition_key(v)),
    },
    FieldMapping {
        name: "deploymentId",
        setter: Setter::String(|q, v| q.deployment_id(v)),
    },
    FieldMapping {
        name: "jobPriorityHigherThanOrEquals",
        setter: Setter::Number(|q, v| q.job_priority_higher_than_or_equals(v)),
    },
    FieldMapping {
        name: "jobPriorityLowerThanOrEquals",
        setter: Setter::Number(|q, v| q.job_priority_lower_than_or_equals(v)),
    },
    FieldMapping {
        name: "creationLog",
        setter: Setter::Flag(|q| q.creation_log()),
    },
    FieldMapping {
        name: "failureLog",
        setter: Setter::Flag(|q| q.failure_log()),
    },
    FieldMapping {
        name: "successLog",
        setter: Setter::Flag(|q| q.success_log()),
    },
    FieldMapping {
        name: "deletionLog",
        setter: Setter::Flag(|q| q.deletion_log()),
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
        key: "timestamp",
        order_by: |q| q.order_by_timestamp(),
    },
    SortMapping {
        key: "jobId",
        order_by: |q| q.order_by_job_id(),
    },
    SortMapping {
        key: "jobDefinitionId",
        order_by: |q| q.order_by_job_definition_id(),
    },
    SortMapping {
        key: "jobDueDate",
        order_by: |q| q.order_by_job_due_date(),
    },
    SortMapping {
        key: "jobRetries",
        order_by: |q| q.order_by_job_retries(),
    },
    SortMapping {
        key: "jobPriority",
        order_by: |q| q.order_by_job_priority(),
    },
    SortMapping {
        key: "activityId",
        order_by: |q| q.order_by_activity_id(),
    },
    SortMapping {
        key: "executionId",
        order_by: |q| q.order_by_execution_id(),
    },
    SortMapping {
        key: "processInstanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "processDefinitionId",
        order_by: |q| q.order_by_process_definition_id(),
    },
    SortMapping {
        key: "processDefinitionKey",
        order_by: |q| q.order_by_process_definition_key(),
    },
    SortMapping {
        key: "deploymentId",
        order_by: |q| q.order_by_deployment_id(),
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
pub fn list(params: &ParameterMap, query: &mut Query) -> Result<Vec<HistoricJobLog>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
