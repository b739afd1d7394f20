//! Tables for the historic case instance endpoint.

use flowtrace_engine::entities::HistoricCaseInstance;
use flowtrace_engine::query::HistoricCaseInstanceQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter, VariableOps};
use crate::params::ParameterMap;
use crate::sort::SortMapping;
use crate::variables::VariableScope;

type Query = dyn HistoricCaseInstanceQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "caseInstanceId",
        setter: Setter::String(|q, v| q.case_instance_id(v)),
    },
    FieldMapping {
        name: "caseInstanceIds",
        setter: Setter::StringList(|q, v| q.case_instance_ids(v)),
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
        name: "caseDefinitionKeyNotIn",
        setter: Setter::StringList(|q, v| q.case_definition_key_not_in(v)),
    },
    FieldMapping {
        name: "caseDefinitionName",
        setter: Setter::String(|q, v| q.case_definition_name(v)),
    },
    FieldMapping {
        name: "caseDefinitionNameLike",
        setter: Setter::String(|q, v| q.case_definition_name_like(v)),
    },
    FieldMapping {
        name: "caseInstanceBusinessKey",
        setter: Setter::String(|q, v| q.case_instance_business_key(v)),
    },
    FieldMapping {
        name: "caseInstanceBusinessKeyLike",
        setter: Setter::String(|q, v| q.case_instance_business_key_like(v)),
    },
    FieldMapping {
        name: "caseActivityIdIn",
        setter: Setter::StringList(|q, v| q.case_activity_id_in(v)),
    },
    FieldMapping {
        name: "createdBefore",
        setter: Setter::Date(|q, v| q.created_before(v)),
    },
    FieldMapping {
        name: "createdAfter",
        setter: Setter::Date(|q, v| q.created_after(v)),
    },
    FieldMapping {
        name: "closedBefore",
        setter: Setter::Date(|q, v| q.closed_before(v)),
    },
    FieldMapping {
        name: "closedAfter",
        setter: Setter::Date(|q, v| q.closed_after(v)),
    },
    FieldMapping {
        name: "createdBy",
        setter: Setter::String(|q, v| q.created_by(v)),
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
        name: "superProcessInstanceId",
        setter: Setter::String(|q, v| q.super_process_instance_id(v)),
    },
    FieldMapping {
        name: "subProcessInstanceId",
        setter: Setter::String(|q, v| q.sub_process_instance_id(v)),
    },
    FieldMapping {
        name: "active",
        setter: Setter::Flag(|q| q.active()),
    },
    FieldMapping {
        name: "completed",
        setter: Setter::Flag(|q| q.completed()),
    },
    FieldMapping {
        name: "terminated",
        setter: Setter::Flag(|q| q.terminated()),
    },
    FieldMapping {
        name: "closed",
        setter: Setter::Flag(|q| q.closed()),
    },
    FieldMapping {
        name: "notClosed",
        setter: Setter::Flag(|q| q.not_closed()),
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
];

/// Sort-key table.
pub const SORT_KEYS: &[SortMapping<Query>] = &[
    SortMapping {
        key: "instanceId",
        order_by: |q| q.order_by_case_instance_id(),
    },
    SortMapping {
        key: "definitionId",
        order_by: |q| q.order_by_case_definition_id(),
    },
    SortMapping {
        key: "businessKey",
        order_by: |q| q.order_by_case_instance_business_key(),
    },
    SortMapping {
        key: "createTime",
        order_by: |q| q.order_by_case_instance_create_time(),
    },
    SortMapping {
        key: "closeTime",
        order_by: |q| q.order_by_case_instance_close_time(),
    },
    SortMapping {
        key: "duration",
        order_by: |q| q.order_by_case_instance_duration(),
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
) -> Result<Vec<HistoricCaseInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
