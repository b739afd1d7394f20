//! Tables for the historic decision instance endpoint.
//!
//! The fetch toggles (`disableBinaryFetching`,
//! `disableCustomObjectDeserialization`) are boolean-flag parameters on
//! this endpoint, not materializer-level toggles.

use flowtrace_engine::entities::HistoricDecisionInstance;
use flowtrace_engine::query::HistoricDecisionInstanceQuery;

use crate::error::QueryError;
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::ParameterMap;
use crate::sort::SortMapping;

type Query = dyn HistoricDecisionInstanceQuery;

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    FieldMapping {
        name: "decisionInstanceId",
        setter: Setter::String(|q, v| q.decision_instance_id(v)),
    },
    FieldMapping {
        name: "decisionInstanceIdIn",
        setter: Setter::StringList(|q, v| q.decision_instance_id_in(v)),
    },
    FieldMapping {
        name: "decisionDefinitionId",
        setter: Setter::String(|q, v| q.decision_definition_id(v)),
    },
    FieldMapping {
        name: "decisionDefinitionIdIn",
        setter: Setter::StringList(|q, v| q.decision_definition_id_in(v)),
    },
    FieldMapping {
        name: "decisionDefinitionKey",
        setter: Setter::String(|q, v| q.decision_definition_key(v)),
    },
    FieldMapping {
        name: "decisionDefinitionKeyIn",
        setter: Setter::StringList(|q, v| q.decision_definition_key_in(v)),
    },
    FieldMapping {
        name: "decisionDefinitionName",
        setter: Setter::String(|q, v| q.decision_definition_name(v)),
    },
    FieldMapping {
        name: "decisionDefinitionNameLike",
        setter: Setter::String(|q, v| q.decision_definition_name_like(v)),
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
        name: "processInstanceId",
        setter: Setter::String(|q, v| q.process_instance_id(v)),
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
        name: "caseInstanceId",
        setter: Setter::String(|q, v| q.case_instance_id(v)),
    },
    FieldMapping {
        name: "activityIdIn",
        setter: Setter::StringList(|q, v| q.activity_id_in(v)),
    },
    FieldMapping {
        name: "activityInstanceIdIn",
        setter: Setter::StringList(|q, v| q.activity_instance_id_in(v)),
    },
    FieldMapping {
        name: "evaluatedBefore",
        setter: Setter::Date(|q, v| q.evaluated_before(v)),
    },
    FieldMapping {
        name: "evaluatedAfter",
        setter: Setter::Date(|q, v| q.evaluated_after(v)),
    },
    FieldMapping {
        name: "userId",
        setter: Setter::String(|q, v| q.user_id(v)),
    },
    FieldMapping {
        name: "rootDecisionInstanceId",
        setter: Setter::String(|q, v| q.root_decision_instance_id(v)),
    },
    FieldMapping {
        name: "rootDecisionInstancesOnly",
        setter: Setter::Flag(|q| q.root_decision_instances_only()),
    },
    FieldMapping {
        name: "decisionRequirementsDefinitionId",
        setter: Setter::String(|q, v| q.decision_requirements_definition_id(v)),
    },
    FieldMapping {
        name: "decisionRequirementsDefinitionKey",
        setter: Setter::String(|q, v| q.decision_requirements_definition_key(v)),
    },
    FieldMapping {
        name: "includeInputs",
        setter: Setter::Flag(|q| q.include_inputs()),
    },
    FieldMapping {
        name: "includeOutputs",
        setter: Setter::Flag(|q| q.include_outputs()),
    },
    FieldMapping {
        name: "disableBinaryFetching",
        setter: Setter::Flag(|q| q.disable_binary_fetching()),
    },
    FieldMapping {
        name: "disableCustomObjectDeserialization",
        setter: Setter::Flag(|q| q.disable_custom_object_deserialization()),
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
        key: "evaluationTime",
        order_by: |q| q.order_by_evaluation_time(),
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
) -> Result<Vec<HistoricDecisionInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
