//! Tables for the historic incident endpoint.

use flowtrace_engine::entities::HistoricIncident;
use flowtrace_engine::query::HistoricIncidentQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::ParameterMap;
use crate::sort::SortMapping;

type Query = dyn HistoricIncidentQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "incidentId",
        setter: Setter::String(|q, v| q.incident_id(v)),
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
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
    },
    FieldMapping {
        name: "executionId",
        setter: Setter::String(|q, v| q.execution_id(v)),
    },
    FieldMapping {
        name: "createTimeBefore",
        setter: Setter::Date(|q, v| q.create_time_before(v)),
    },
    FieldMapping {
        name: "createTimeAfter",
        setter: Setter::Date(|q, v| q.create_time_after(v)),
    },
    FieldMapping {
        name: "endTimeBefore",
        setter: Setter::Date(|q, v| q.end_time_before(v)),
    },
    FieldMapping {
        name: "endTimeAfter",
        setter: Setter::Date(|q, v| q.end_time_after(v)),
    },
    FieldMapping {
        name: "activityId",
        setter: Setter::String(|q, v| q.activity_id(v)),
    },
    FieldMapping {
        name: "failedActivityId",
        setter: Setter::String(|q, v| q.failed_activity_id(v)),
    },
    FieldMapping {
        name: "causeIncidentId",
        setter: Setter::String(|q, v| q.cause_incident_id(v)),
    },
    FieldMapping {
        name: "rootCauseIncidentId",
        setter: Setter::String(|q, v| q.root_cause_incident_id(v)),
    },
    FieldMapping {
        name: "configuration",
        setter: Setter::String(|q, v| q.configuration(v)),
    },
    FieldMapping {
        name: "historyConfiguration",
        setter: Setter::String(|q, v| q.history_configuration(v)),
    },
    FieldMapping {
        name: "open",
        setter: Setter::Flag(|q| q.open()),
    },
    FieldMapping {
        name: "deleted",
        setter: Setter::Flag(|q| q.deleted()),
    },
    FieldMapping {
        name: "resolved",
        setter: Setter::Flag(|q| q.resolved()),
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
        name: "jobDefinitionIdIn",
        setter: Setter::StringList(|q, v| q.job_definition_id_in(v)),
    },
];

/// Sort-key table. Every key resolves to its own ordering operation;
/// `incidentMessage` in particular orders by the incident message.
pub const SORT_KEYS: &[SortMapping<Query>] = &[
    SortMapping {
        key: "incidentId",
        order_by: |q| q.order_by_incident_id(),
    },
    SortMapping {
        key: "incidentMessage",
        order_by: |q| q.order_by_incident_message(),
    },
    SortMapping {
        key: "createTime",
        order_by: |q| q.order_by_create_time(),
    },
    SortMapping {
        key: "endTime",
        order_by: |q| q.order_by_end_time(),
    },
    SortMapping {
        key: "incidentType",
        order_by: |q| q.order_by_incident_type(),
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
        key: "causeIncidentId",
        order_by: |q| q.order_by_cause_incident_id(),
    },
    SortMapping {
        key: "rootCauseIncidentId",
        order_by: |q| q.order_by_root_cause_incident_id(),
    },
    SortMapping {
        key: "configuration",
        order_by: |q| q.order_by_configuration(),
    },
    SortMapping {
        key: "incidentState",
        order_by: |q| q.order_by_incident_state(),
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
pub fn list(params: &ParameterMap, query: &mut Query) -> Result<Vec<HistoricIncident>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
