//! Tables for the historic variable instance endpoint.
//!
//! `variableName` and `variableValue` interact: a name alone filters by
//! name, a name with a value becomes an equality comparison, and a value
//! without a name is invalid. Binary fetching is suppressed on every
//! list request; `deserializeValues=false` additionally suppresses custom
//! object deserialization.

use flowtrace_engine::entities::HistoricVariableInstance;
use flowtrace_engine::query::{HistoricVariableInstanceQuery, VariableValue};

use crate::error::{InvalidRequest, QueryError};
use crate::execute::{self, QueryDescriptor};
use crate::fields::{FieldMapping, Setter};
use crate::params::{ParameterMap, RawValue};
use crate::sort::SortMapping;

type Query = dyn HistoricVariableInstanceQuery;

fn comparison_value(raw: &RawValue) -> VariableValue {
    match raw {
        RawValue::Text(text) => VariableValue::String(text.clone()),
        RawValue::Json(value) => value.clone(),
    }
}

/// Parameter table, in dispatch order.
pub const FIELDS: &[FieldMapping<Query>] = &[
    // A lone variableName filters by name; combined with variableValue it
    // becomes one equality comparison applied by the entry below.
    FieldMapping {
        name: "variableName",
        setter: Setter::WithParams(|params, query| {
            if params.contains("variableValue") {
                return Ok(());
            }
            match params.get("variableName") {
                Some(raw) => Ok(query.variable_name(raw.string("variableName")?)?),
                None => Ok(()),
            }
        }),
    },
    FieldMapping {
        name: "variableValue",
        setter: Setter::WithParams(|params, query| {
            let Some(raw_value) = params.get("variableValue") else {
                return Ok(());
            };
            let Some(raw_name) = params.get("variableName") else {
                return Err(InvalidRequest::IncompleteVariableValue.into());
            };
            let name = raw_name.string("variableName")?;
            query.variable_value_equals(name, comparison_value(raw_value))?;
            Ok(())
        }),
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
        name: "variableNameLike",
        setter: Setter::String(|q, v| q.variable_name_like(v)),
    },
    FieldMapping {
        name: "variableNameIn",
        setter: Setter::StringList(|q, v| q.variable_name_in(v)),
    },
    FieldMapping {
        name: "variableTypeIn",
        setter: Setter::StringList(|q, v| q.variable_type_in(v)),
    },
    FieldMapping {
        name: "includeDeleted",
        setter: Setter::Flag(|q| q.include_deleted()),
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
        name: "processInstanceIdIn",
        setter: Setter::StringList(|q, v| q.process_instance_id_in(v)),
    },
    FieldMapping {
        name: "executionIdIn",
        setter: Setter::StringList(|q, v| q.execution_id_in(v)),
    },
    FieldMapping {
        name: "caseInstanceId",
        setter: Setter::String(|q, v| q.case_instance_id(v)),
    },
    FieldMapping {
        name: "caseExecutionIdIn",
        setter: Setter::StringList(|q, v| q.case_execution_id_in(v)),
    },
    FieldMapping {
        name: "caseActivityIdIn",
        setter: Setter::StringList(|q, v| q.case_activity_id_in(v)),
    },
    FieldMapping {
        name: "activityInstanceIdIn",
        setter: Setter::StringList(|q, v| q.activity_instance_id_in(v)),
    },
    FieldMapping {
        name: "taskIdIn",
        setter: Setter::StringList(|q, v| q.task_id_in(v)),
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
        key: "instanceId",
        order_by: |q| q.order_by_process_instance_id(),
    },
    SortMapping {
        key: "variableName",
        order_by: |q| q.order_by_variable_name(),
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
pub fn list(
    params: &ParameterMap,
    query: &mut Query,
) -> Result<Vec<HistoricVariableInstance>, QueryError> {
    execute::list(&DESCRIPTOR, params, query)
}

/// Translates `params` onto `query` and materializes the count.
pub fn count(params: &ParameterMap, query: &mut Query) -> Result<i64, QueryError> {
    execute::count(&DESCRIPTOR, params, query)
}
