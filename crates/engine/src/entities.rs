//! History record types returned by the engine's query builders.
//!
//! These are the wire shapes of the history API: field names serialize in
//! camelCase and absent values are omitted. The engine owns how records
//! are produced; this crate only fixes their shape.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Engine timestamp as it appears on the wire.
pub type HistoryTime = DateTime<FixedOffset>;

/// A finished or running process instance as recorded in history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricProcessInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_millis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Lifecycle state: `ACTIVE`, `SUSPENDED`, `COMPLETED`,
    /// `EXTERNALLY_TERMINATED` or `INTERNALLY_TERMINATED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One executed activity (task, gateway, event, ...) of a process instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricActivityInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub called_process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub called_case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_millis: Option<i64>,
    pub canceled: bool,
    pub complete_scope: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// A case instance as recorded in history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricCaseInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_millis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Lifecycle state: `ACTIVE`, `COMPLETED`, `TERMINATED` or `CLOSED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// An input value that was fed into an evaluated decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricDecisionInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// An output value produced by an evaluated decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricDecisionOutput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One evaluation of a decision, optionally carrying its inputs/outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricDecisionInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_definition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_result_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_decision_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_requirements_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_requirements_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Only populated when the query enabled input fetching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<HistoricDecisionInput>>,
    /// Only populated when the query enabled output fetching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<HistoricDecisionOutput>>,
}

/// A variable update or form-field submission recorded in history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricDetail {
    pub id: String,
    /// Discriminator: `variableUpdate` or `formField`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// An incident (failed job, unhandled error, ...) recorded in history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricIncident {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause_incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub open: bool,
    pub deleted: bool,
    pub resolved: bool,
}

/// One state change of a job: created, failed, succeeded or deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricJobLog {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_due_date: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_retries: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_exception_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_definition_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_definition_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub creation_log: bool,
    pub failure_log: bool,
    pub success_log: bool,
    pub deletion_log: bool,
}

/// A user task instance as recorded in history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricTaskInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// The latest recorded value of a process or case variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricVariableInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value type as reported by the engine (`String`, `Long`, `Object`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// `CREATED` or `DELETED`; deleted values only appear when the query
    /// opted in via `includeDeleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<HistoryTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_instance_serializes_camel_case() {
        let instance = HistoricProcessInstance {
            id: "anId".to_string(),
            business_key: Some("aKey".to_string()),
            duration_in_millis: Some(2000),
            ..Default::default()
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["id"], "anId");
        assert_eq!(json["businessKey"], "aKey");
        assert_eq!(json["durationInMillis"], 2000);
        assert!(json.get("processDefinitionId").is_none());
    }

    #[test]
    fn test_variable_instance_type_field_rename() {
        let instance = HistoricVariableInstance {
            id: "anId".to_string(),
            type_name: Some("String".to_string()),
            value: Some(serde_json::json!("aValue")),
            ..Default::default()
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["type"], "String");
        assert_eq!(json["value"], "aValue");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let json = serde_json::json!({
            "id": "anId",
            "startTime": "2013-01-23T13:42:45.000+02:00"
        });

        let instance: HistoricProcessInstance = serde_json::from_value(json).unwrap();
        let start = instance.start_time.unwrap();
        assert_eq!(start.timezone().local_minus_utc(), 2 * 3600);
    }
}
