//! Call-recording engine for tests.
//!
//! Every builder trait gets a recording implementation that appends each
//! call (camelCase method name plus JSON-encoded arguments) to a shared
//! [`CallLog`] and returns canned results from the terminal operations.
//! Tests drive the translation layer against these builders and assert the
//! exact ordered call sequence a request produced.
//!
//! Failure injection: [`Recorder::fail_on`] arms one method name with an
//! [`EngineError`]; the next call to that method records normally and then
//! returns the error, which lets tests exercise engine-side validation and
//! authorization failures mid-dispatch.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};

use crate::entities::{
    HistoricActivityInstance, HistoricCaseInstance, HistoricDecisionInstance, HistoricDetail,
    HistoricIncident, HistoricJobLog, HistoricProcessInstance, HistoricTaskInstance,
    HistoricVariableInstance,
};
use crate::error::{EngineError, EngineResult};
use crate::query::{
    HistoricActivityInstanceQuery, HistoricCaseInstanceQuery, HistoricDecisionInstanceQuery,
    HistoricDetailQuery, HistoricIncidentQuery, HistoricJobLogQuery, HistoricProcessInstanceQuery,
    HistoricTaskInstanceQuery, HistoricVariableInstanceQuery, HistoryQuery, VariableValue,
};
use crate::service::HistoryService;

/// One recorded builder call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Method name in the engine's camelCase wire spelling.
    pub method: &'static str,
    /// JSON-encoded arguments, in positional order.
    pub args: Vec<Value>,
}

impl Call {
    /// Creates a call record.
    pub fn new(method: &'static str, args: Vec<Value>) -> Self {
        Self { method, args }
    }
}

/// Shared, append-only log of builder calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one call.
    pub fn record(&self, method: &'static str, args: Vec<Value>) {
        self.calls.lock().unwrap().push(Call::new(method, args));
    }

    /// Returns a snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns just the method names, in call order.
    pub fn method_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|c| c.method).collect()
    }

    /// Discards all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Call log plus failure injection, shared by all builders of one test.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: CallLog,
    fail_on: Arc<Mutex<Option<(String, EngineError)>>>,
}

impl Recorder {
    /// Creates a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying call log.
    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// Arms `method` to fail with `error` when next invoked.
    pub fn fail_on(&self, method: impl Into<String>, error: EngineError) {
        *self.fail_on.lock().unwrap() = Some((method.into(), error));
    }

    fn hit(&self, method: &'static str, args: Vec<Value>) -> EngineResult<()> {
        self.log.record(method, args);
        let guard = self.fail_on.lock().unwrap();
        if let Some((armed, error)) = guard.as_ref() {
            if armed == method {
                return Err(error.clone());
            }
        }
        Ok(())
    }
}

fn date_arg(date: &DateTime<FixedOffset>) -> Value {
    json!(date.to_rfc3339())
}

macro_rules! recording_query {
    (
        $(#[$meta:meta])*
        $name:ident: $trait_:ident, $item:ty;
        strings { $( $sm:ident => $sn:literal ),* $(,)? }
        lists { $( $lm:ident => $ln:literal ),* $(,)? }
        dates { $( $dm:ident => $dn:literal ),* $(,)? }
        numbers { $( $nm:ident => $nn:literal ),* $(,)? }
        flags { $( $gm:ident => $gn:literal ),* $(,)? }
        variables { $( $vm:ident => $vn:literal ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            recorder: Recorder,
            items: Vec<$item>,
            count: i64,
        }

        impl $name {
            /// Creates a recording builder backed by `recorder`.
            pub fn new(recorder: Recorder) -> Self {
                Self {
                    recorder,
                    items: Vec::new(),
                    count: 0,
                }
            }

            /// Sets the canned records returned by `list`/`list_page`;
            /// `count` follows their number.
            pub fn with_items(mut self, items: Vec<$item>) -> Self {
                self.count = items.len() as i64;
                self.items = items;
                self
            }

            /// Overrides the canned result of `count`.
            pub fn with_count(mut self, count: i64) -> Self {
                self.count = count;
                self
            }
        }

        impl HistoryQuery for $name {
            type Item = $item;

            fn asc(&mut self) -> EngineResult<()> {
                self.recorder.hit("asc", vec![])
            }

            fn desc(&mut self) -> EngineResult<()> {
                self.recorder.hit("desc", vec![])
            }

            fn list(&mut self) -> EngineResult<Vec<$item>> {
                self.recorder.hit("list", vec![])?;
                Ok(self.items.clone())
            }

            fn list_page(
                &mut self,
                first_result: i32,
                max_results: i32,
            ) -> EngineResult<Vec<$item>> {
                self.recorder
                    .hit("listPage", vec![json!(first_result), json!(max_results)])?;
                Ok(self.items.clone())
            }

            fn count(&mut self) -> EngineResult<i64> {
                self.recorder.hit("count", vec![])?;
                Ok(self.count)
            }
        }

        impl $trait_ for $name {
            $(
                fn $sm(&mut self, value: String) -> EngineResult<()> {
                    self.recorder.hit($sn, vec![json!(value)])
                }
            )*
            $(
                fn $lm(&mut self, values: Vec<String>) -> EngineResult<()> {
                    self.recorder.hit($ln, vec![json!(values)])
                }
            )*
            $(
                fn $dm(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()> {
                    self.recorder.hit($dn, vec![date_arg(&date)])
                }
            )*
            $(
                fn $nm(&mut self, value: i64) -> EngineResult<()> {
                    self.recorder.hit($nn, vec![json!(value)])
                }
            )*
            $(
                fn $gm(&mut self) -> EngineResult<()> {
                    self.recorder.hit($gn, vec![])
                }
            )*
            $(
                fn $vm(&mut self, name: String, value: VariableValue) -> EngineResult<()> {
                    self.recorder.hit($vn, vec![json!(name), value])
                }
            )*
        }
    };
}

recording_query! {
    /// Recording implementation of [`HistoricProcessInstanceQuery`].
    RecordingProcessInstanceQuery: HistoricProcessInstanceQuery, HistoricProcessInstance;
    strings {
        process_instance_id => "processInstanceId",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        process_definition_name => "processDefinitionName",
        process_definition_name_like => "processDefinitionNameLike",
        process_instance_business_key => "processInstanceBusinessKey",
        process_instance_business_key_like => "processInstanceBusinessKeyLike",
        started_by => "startedBy",
        super_process_instance_id => "superProcessInstanceId",
        sub_process_instance_id => "subProcessInstanceId",
        super_case_instance_id => "superCaseInstanceId",
        sub_case_instance_id => "subCaseInstanceId",
        case_instance_id => "caseInstanceId",
        incident_type => "incidentType",
        incident_status => "incidentStatus",
        incident_message => "incidentMessage",
        incident_message_like => "incidentMessageLike",
    }
    lists {
        process_instance_ids => "processInstanceIds",
        process_definition_key_in => "processDefinitionKeyIn",
        process_definition_key_not_in => "processDefinitionKeyNotIn",
        process_instance_business_key_in => "processInstanceBusinessKeyIn",
        executed_activity_id_in => "executedActivityIdIn",
        active_activity_id_in => "activeActivityIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        started_before => "startedBefore",
        started_after => "startedAfter",
        finished_before => "finishedBefore",
        finished_after => "finishedAfter",
        executed_activity_before => "executedActivityBefore",
        executed_activity_after => "executedActivityAfter",
        executed_job_before => "executedJobBefore",
        executed_job_after => "executedJobAfter",
    }
    numbers {}
    flags {
        without_tenant_id => "withoutTenantId",
        root_process_instances => "rootProcessInstances",
        finished => "finished",
        unfinished => "unfinished",
        with_incidents => "withIncidents",
        with_root_incidents => "withRootIncidents",
        active => "active",
        suspended => "suspended",
        completed => "completed",
        externally_terminated => "externallyTerminated",
        internally_terminated => "internallyTerminated",
        match_variable_names_ignore_case => "matchVariableNamesIgnoreCase",
        match_variable_values_ignore_case => "matchVariableValuesIgnoreCase",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_process_definition_id => "orderByProcessDefinitionId",
        order_by_process_definition_key => "orderByProcessDefinitionKey",
        order_by_process_definition_name => "orderByProcessDefinitionName",
        order_by_process_definition_version => "orderByProcessDefinitionVersion",
        order_by_process_instance_business_key => "orderByProcessInstanceBusinessKey",
        order_by_process_instance_start_time => "orderByProcessInstanceStartTime",
        order_by_process_instance_end_time => "orderByProcessInstanceEndTime",
        order_by_process_instance_duration => "orderByProcessInstanceDuration",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {
        variable_value_equals => "variableValueEquals",
        variable_value_not_equals => "variableValueNotEquals",
        variable_value_greater_than => "variableValueGreaterThan",
        variable_value_greater_than_or_equal => "variableValueGreaterThanOrEqual",
        variable_value_less_than => "variableValueLessThan",
        variable_value_less_than_or_equal => "variableValueLessThanOrEqual",
        variable_value_like => "variableValueLike",
    }
}

recording_query! {
    /// Recording implementation of [`HistoricActivityInstanceQuery`].
    RecordingActivityInstanceQuery: HistoricActivityInstanceQuery, HistoricActivityInstance;
    strings {
        activity_instance_id => "activityInstanceId",
        activity_id => "activityId",
        activity_name => "activityName",
        activity_type => "activityType",
        process_instance_id => "processInstanceId",
        process_definition_id => "processDefinitionId",
        execution_id => "executionId",
        task_assignee => "taskAssignee",
    }
    lists {
        tenant_id_in => "tenantIdIn",
    }
    dates {
        started_before => "startedBefore",
        started_after => "startedAfter",
        finished_before => "finishedBefore",
        finished_after => "finishedAfter",
    }
    numbers {}
    flags {
        finished => "finished",
        unfinished => "unfinished",
        canceled => "canceled",
        complete_scope => "completeScope",
        without_tenant_id => "withoutTenantId",
        order_by_historic_activity_instance_id => "orderByHistoricActivityInstanceId",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_execution_id => "orderByExecutionId",
        order_by_activity_id => "orderByActivityId",
        order_by_activity_name => "orderByActivityName",
        order_by_activity_type => "orderByActivityType",
        order_by_historic_activity_instance_start_time => "orderByHistoricActivityInstanceStartTime",
        order_by_historic_activity_instance_end_time => "orderByHistoricActivityInstanceEndTime",
        order_by_historic_activity_instance_duration => "orderByHistoricActivityInstanceDuration",
        order_by_process_definition_id => "orderByProcessDefinitionId",
        order_partially_by_occurrence => "orderPartiallyByOccurrence",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {}
}

recording_query! {
    /// Recording implementation of [`HistoricCaseInstanceQuery`].
    RecordingCaseInstanceQuery: HistoricCaseInstanceQuery, HistoricCaseInstance;
    strings {
        case_instance_id => "caseInstanceId",
        case_definition_id => "caseDefinitionId",
        case_definition_key => "caseDefinitionKey",
        case_definition_name => "caseDefinitionName",
        case_definition_name_like => "caseDefinitionNameLike",
        case_instance_business_key => "caseInstanceBusinessKey",
        case_instance_business_key_like => "caseInstanceBusinessKeyLike",
        created_by => "createdBy",
        super_case_instance_id => "superCaseInstanceId",
        sub_case_instance_id => "subCaseInstanceId",
        super_process_instance_id => "superProcessInstanceId",
        sub_process_instance_id => "subProcessInstanceId",
    }
    lists {
        case_instance_ids => "caseInstanceIds",
        case_definition_key_not_in => "caseDefinitionKeyNotIn",
        case_activity_id_in => "caseActivityIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        created_before => "createdBefore",
        created_after => "createdAfter",
        closed_before => "closedBefore",
        closed_after => "closedAfter",
    }
    numbers {}
    flags {
        active => "active",
        completed => "completed",
        terminated => "terminated",
        closed => "closed",
        not_closed => "notClosed",
        without_tenant_id => "withoutTenantId",
        order_by_case_instance_id => "orderByCaseInstanceId",
        order_by_case_definition_id => "orderByCaseDefinitionId",
        order_by_case_instance_business_key => "orderByCaseInstanceBusinessKey",
        order_by_case_instance_create_time => "orderByCaseInstanceCreateTime",
        order_by_case_instance_close_time => "orderByCaseInstanceCloseTime",
        order_by_case_instance_duration => "orderByCaseInstanceDuration",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {
        variable_value_equals => "variableValueEquals",
        variable_value_not_equals => "variableValueNotEquals",
        variable_value_greater_than => "variableValueGreaterThan",
        variable_value_greater_than_or_equal => "variableValueGreaterThanOrEqual",
        variable_value_less_than => "variableValueLessThan",
        variable_value_less_than_or_equal => "variableValueLessThanOrEqual",
        variable_value_like => "variableValueLike",
    }
}

recording_query! {
    /// Recording implementation of [`HistoricDecisionInstanceQuery`].
    RecordingDecisionInstanceQuery: HistoricDecisionInstanceQuery, HistoricDecisionInstance;
    strings {
        decision_instance_id => "decisionInstanceId",
        decision_definition_id => "decisionDefinitionId",
        decision_definition_key => "decisionDefinitionKey",
        decision_definition_name => "decisionDefinitionName",
        decision_definition_name_like => "decisionDefinitionNameLike",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        process_instance_id => "processInstanceId",
        case_definition_id => "caseDefinitionId",
        case_definition_key => "caseDefinitionKey",
        case_instance_id => "caseInstanceId",
        user_id => "userId",
        root_decision_instance_id => "rootDecisionInstanceId",
        decision_requirements_definition_id => "decisionRequirementsDefinitionId",
        decision_requirements_definition_key => "decisionRequirementsDefinitionKey",
    }
    lists {
        decision_instance_id_in => "decisionInstanceIdIn",
        decision_definition_id_in => "decisionDefinitionIdIn",
        decision_definition_key_in => "decisionDefinitionKeyIn",
        activity_id_in => "activityIdIn",
        activity_instance_id_in => "activityInstanceIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        evaluated_before => "evaluatedBefore",
        evaluated_after => "evaluatedAfter",
    }
    numbers {}
    flags {
        root_decision_instances_only => "rootDecisionInstancesOnly",
        include_inputs => "includeInputs",
        include_outputs => "includeOutputs",
        disable_binary_fetching => "disableBinaryFetching",
        disable_custom_object_deserialization => "disableCustomObjectDeserialization",
        without_tenant_id => "withoutTenantId",
        order_by_evaluation_time => "orderByEvaluationTime",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {}
}

recording_query! {
    /// Recording implementation of [`HistoricDetailQuery`].
    RecordingDetailQuery: HistoricDetailQuery, HistoricDetail;
    strings {
        process_instance_id => "processInstanceId",
        execution_id => "executionId",
        activity_instance_id => "activityInstanceId",
        case_instance_id => "caseInstanceId",
        case_execution_id => "caseExecutionId",
        task_id => "taskId",
        variable_instance_id => "variableInstanceId",
        user_operation_id => "userOperationId",
    }
    lists {
        process_instance_id_in => "processInstanceIdIn",
        variable_type_in => "variableTypeIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        occurred_before => "occurredBefore",
        occurred_after => "occurredAfter",
    }
    numbers {}
    flags {
        variable_updates => "variableUpdates",
        form_fields => "formFields",
        exclude_task_details => "excludeTaskDetails",
        without_tenant_id => "withoutTenantId",
        disable_binary_fetching => "disableBinaryFetching",
        disable_custom_object_deserialization => "disableCustomObjectDeserialization",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_variable_name => "orderByVariableName",
        order_by_variable_type => "orderByVariableType",
        order_by_variable_revision => "orderByVariableRevision",
        order_by_form_property_id => "orderByFormPropertyId",
        order_by_time => "orderByTime",
        order_partially_by_occurrence => "orderPartiallyByOccurrence",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {}
}

recording_query! {
    /// Recording implementation of [`HistoricIncidentQuery`].
    RecordingIncidentQuery: HistoricIncidentQuery, HistoricIncident;
    strings {
        incident_id => "incidentId",
        incident_type => "incidentType",
        incident_message => "incidentMessage",
        incident_message_like => "incidentMessageLike",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        process_instance_id => "processInstanceId",
        execution_id => "executionId",
        activity_id => "activityId",
        failed_activity_id => "failedActivityId",
        cause_incident_id => "causeIncidentId",
        root_cause_incident_id => "rootCauseIncidentId",
        configuration => "configuration",
        history_configuration => "historyConfiguration",
    }
    lists {
        process_definition_key_in => "processDefinitionKeyIn",
        job_definition_id_in => "jobDefinitionIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        create_time_before => "createTimeBefore",
        create_time_after => "createTimeAfter",
        end_time_before => "endTimeBefore",
        end_time_after => "endTimeAfter",
    }
    numbers {}
    flags {
        open => "open",
        deleted => "deleted",
        resolved => "resolved",
        without_tenant_id => "withoutTenantId",
        order_by_incident_id => "orderByIncidentId",
        order_by_incident_message => "orderByIncidentMessage",
        order_by_create_time => "orderByCreateTime",
        order_by_end_time => "orderByEndTime",
        order_by_incident_type => "orderByIncidentType",
        order_by_execution_id => "orderByExecutionId",
        order_by_activity_id => "orderByActivityId",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_process_definition_id => "orderByProcessDefinitionId",
        order_by_process_definition_key => "orderByProcessDefinitionKey",
        order_by_cause_incident_id => "orderByCauseIncidentId",
        order_by_root_cause_incident_id => "orderByRootCauseIncidentId",
        order_by_configuration => "orderByConfiguration",
        order_by_incident_state => "orderByIncidentState",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {}
}

recording_query! {
    /// Recording implementation of [`HistoricJobLogQuery`].
    RecordingJobLogQuery: HistoricJobLogQuery, HistoricJobLog;
    strings {
        log_id => "logId",
        job_id => "jobId",
        job_exception_message => "jobExceptionMessage",
        job_definition_id => "jobDefinitionId",
        job_definition_type => "jobDefinitionType",
        job_definition_configuration => "jobDefinitionConfiguration",
        process_instance_id => "processInstanceId",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        deployment_id => "deploymentId",
    }
    lists {
        activity_id_in => "activityIdIn",
        execution_id_in => "executionIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {}
    numbers {
        job_priority_higher_than_or_equals => "jobPriorityHigherThanOrEquals",
        job_priority_lower_than_or_equals => "jobPriorityLowerThanOrEquals",
    }
    flags {
        creation_log => "creationLog",
        failure_log => "failureLog",
        success_log => "successLog",
        deletion_log => "deletionLog",
        without_tenant_id => "withoutTenantId",
        order_by_timestamp => "orderByTimestamp",
        order_by_job_id => "orderByJobId",
        order_by_job_definition_id => "orderByJobDefinitionId",
        order_by_job_due_date => "orderByJobDueDate",
        order_by_job_retries => "orderByJobRetries",
        order_by_job_priority => "orderByJobPriority",
        order_by_activity_id => "orderByActivityId",
        order_by_execution_id => "orderByExecutionId",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_process_definition_id => "orderByProcessDefinitionId",
        order_by_process_definition_key => "orderByProcessDefinitionKey",
        order_by_deployment_id => "orderByDeploymentId",
        order_partially_by_occurrence => "orderPartiallyByOccurrence",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {}
}

recording_query! {
    /// Recording implementation of [`HistoricTaskInstanceQuery`].
    RecordingTaskInstanceQuery: HistoricTaskInstanceQuery, HistoricTaskInstance;
    strings {
        task_id => "taskId",
        task_parent_task_id => "taskParentTaskId",
        process_instance_id => "processInstanceId",
        process_instance_business_key => "processInstanceBusinessKey",
        process_instance_business_key_like => "processInstanceBusinessKeyLike",
        execution_id => "executionId",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        process_definition_name => "processDefinitionName",
        task_name => "taskName",
        task_name_like => "taskNameLike",
        task_description => "taskDescription",
        task_description_like => "taskDescriptionLike",
        task_definition_key => "taskDefinitionKey",
        task_delete_reason => "taskDeleteReason",
        task_delete_reason_like => "taskDeleteReasonLike",
        task_assignee => "taskAssignee",
        task_assignee_like => "taskAssigneeLike",
        task_owner => "taskOwner",
        task_owner_like => "taskOwnerLike",
        task_involved_user => "taskInvolvedUser",
        task_involved_group => "taskInvolvedGroup",
        task_had_candidate_user => "taskHadCandidateUser",
        task_had_candidate_group => "taskHadCandidateGroup",
        case_definition_id => "caseDefinitionId",
        case_definition_key => "caseDefinitionKey",
        case_definition_name => "caseDefinitionName",
        case_instance_id => "caseInstanceId",
        case_execution_id => "caseExecutionId",
    }
    lists {
        process_instance_business_key_in => "processInstanceBusinessKeyIn",
        activity_instance_id_in => "activityInstanceIdIn",
        task_definition_key_in => "taskDefinitionKeyIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {
        task_due_date => "taskDueDate",
        task_due_before => "taskDueBefore",
        task_due_after => "taskDueAfter",
        task_follow_up_date => "taskFollowUpDate",
        task_follow_up_before => "taskFollowUpBefore",
        task_follow_up_after => "taskFollowUpAfter",
        started_before => "startedBefore",
        started_after => "startedAfter",
        finished_before => "finishedBefore",
        finished_after => "finishedAfter",
    }
    numbers {
        task_priority => "taskPriority",
    }
    flags {
        task_assigned => "taskAssigned",
        task_unassigned => "taskUnassigned",
        finished => "finished",
        unfinished => "unfinished",
        process_finished => "processFinished",
        process_unfinished => "processUnfinished",
        with_candidate_groups => "withCandidateGroups",
        without_candidate_groups => "withoutCandidateGroups",
        without_task_due_date => "withoutTaskDueDate",
        without_tenant_id => "withoutTenantId",
        match_variable_names_ignore_case => "matchVariableNamesIgnoreCase",
        match_variable_values_ignore_case => "matchVariableValuesIgnoreCase",
        order_by_task_id => "orderByTaskId",
        order_by_historic_activity_instance_id => "orderByHistoricActivityInstanceId",
        order_by_process_definition_id => "orderByProcessDefinitionId",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_execution_id => "orderByExecutionId",
        order_by_historic_task_instance_duration => "orderByHistoricTaskInstanceDuration",
        order_by_historic_task_instance_end_time => "orderByHistoricTaskInstanceEndTime",
        order_by_historic_task_instance_start_time => "orderByHistoricTaskInstanceStartTime",
        order_by_task_name => "orderByTaskName",
        order_by_task_description => "orderByTaskDescription",
        order_by_task_assignee => "orderByTaskAssignee",
        order_by_task_owner => "orderByTaskOwner",
        order_by_task_due_date => "orderByTaskDueDate",
        order_by_task_follow_up_date => "orderByTaskFollowUpDate",
        order_by_delete_reason => "orderByDeleteReason",
        order_by_task_definition_key => "orderByTaskDefinitionKey",
        order_by_task_priority => "orderByTaskPriority",
        order_by_case_definition_id => "orderByCaseDefinitionId",
        order_by_case_instance_id => "orderByCaseInstanceId",
        order_by_case_execution_id => "orderByCaseExecutionId",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {
        task_variable_value_equals => "taskVariableValueEquals",
        task_variable_value_not_equals => "taskVariableValueNotEquals",
        task_variable_value_greater_than => "taskVariableValueGreaterThan",
        task_variable_value_greater_than_or_equal => "taskVariableValueGreaterThanOrEqual",
        task_variable_value_less_than => "taskVariableValueLessThan",
        task_variable_value_less_than_or_equal => "taskVariableValueLessThanOrEqual",
        task_variable_value_like => "taskVariableValueLike",
        process_variable_value_equals => "processVariableValueEquals",
        process_variable_value_not_equals => "processVariableValueNotEquals",
        process_variable_value_greater_than => "processVariableValueGreaterThan",
        process_variable_value_greater_than_or_equal => "processVariableValueGreaterThanOrEqual",
        process_variable_value_less_than => "processVariableValueLessThan",
        process_variable_value_less_than_or_equal => "processVariableValueLessThanOrEqual",
        process_variable_value_like => "processVariableValueLike",
    }
}

recording_query! {
    /// Recording implementation of [`HistoricVariableInstanceQuery`].
    RecordingVariableInstanceQuery: HistoricVariableInstanceQuery, HistoricVariableInstance;
    strings {
        variable_name => "variableName",
        variable_name_like => "variableNameLike",
        process_definition_id => "processDefinitionId",
        process_definition_key => "processDefinitionKey",
        process_instance_id => "processInstanceId",
        case_instance_id => "caseInstanceId",
    }
    lists {
        variable_name_in => "variableNameIn",
        variable_type_in => "variableTypeIn",
        process_instance_id_in => "processInstanceIdIn",
        execution_id_in => "executionIdIn",
        case_execution_id_in => "caseExecutionIdIn",
        case_activity_id_in => "caseActivityIdIn",
        activity_instance_id_in => "activityInstanceIdIn",
        task_id_in => "taskIdIn",
        tenant_id_in => "tenantIdIn",
    }
    dates {}
    numbers {}
    flags {
        without_tenant_id => "withoutTenantId",
        include_deleted => "includeDeleted",
        match_variable_names_ignore_case => "matchVariableNamesIgnoreCase",
        match_variable_values_ignore_case => "matchVariableValuesIgnoreCase",
        disable_binary_fetching => "disableBinaryFetching",
        disable_custom_object_deserialization => "disableCustomObjectDeserialization",
        order_by_process_instance_id => "orderByProcessInstanceId",
        order_by_variable_name => "orderByVariableName",
        order_by_tenant_id => "orderByTenantId",
    }
    variables {
        variable_value_equals => "variableValueEquals",
    }
}

/// Canned history records served by the recording engine.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub process_instances: Vec<HistoricProcessInstance>,
    pub activity_instances: Vec<HistoricActivityInstance>,
    pub case_instances: Vec<HistoricCaseInstance>,
    pub decision_instances: Vec<HistoricDecisionInstance>,
    pub details: Vec<HistoricDetail>,
    pub incidents: Vec<HistoricIncident>,
    pub job_logs: Vec<HistoricJobLog>,
    pub task_instances: Vec<HistoricTaskInstance>,
    pub variable_instances: Vec<HistoricVariableInstance>,
}

/// In-memory [`HistoryService`] whose builders record every call.
///
/// All builders created by one service share one [`Recorder`], so a test
/// can drive a request end to end and assert the resulting call sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordingHistoryService {
    recorder: Recorder,
    fixtures: Arc<Fixtures>,
}

impl RecordingHistoryService {
    /// Creates a service with no canned records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service serving `fixtures` from every builder.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        Self {
            recorder: Recorder::new(),
            fixtures: Arc::new(fixtures),
        }
    }

    /// The recorder shared by all builders of this service.
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Snapshot of all calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.recorder.log().calls()
    }
}

impl HistoryService for RecordingHistoryService {
    fn create_historic_process_instance_query(
        &self,
    ) -> Box<dyn HistoricProcessInstanceQuery + Send> {
        Box::new(
            RecordingProcessInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.process_instances.clone()),
        )
    }

    fn create_historic_activity_instance_query(
        &self,
    ) -> Box<dyn HistoricActivityInstanceQuery + Send> {
        Box::new(
            RecordingActivityInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.activity_instances.clone()),
        )
    }

    fn create_historic_case_instance_query(&self) -> Box<dyn HistoricCaseInstanceQuery + Send> {
        Box::new(
            RecordingCaseInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.case_instances.clone()),
        )
    }

    fn create_historic_decision_instance_query(
        &self,
    ) -> Box<dyn HistoricDecisionInstanceQuery + Send> {
        Box::new(
            RecordingDecisionInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.decision_instances.clone()),
        )
    }

    fn create_historic_detail_query(&self) -> Box<dyn HistoricDetailQuery + Send> {
        Box::new(
            RecordingDetailQuery::new(self.recorder.clone())
                .with_items(self.fixtures.details.clone()),
        )
    }

    fn create_historic_incident_query(&self) -> Box<dyn HistoricIncidentQuery + Send> {
        Box::new(
            RecordingIncidentQuery::new(self.recorder.clone())
                .with_items(self.fixtures.incidents.clone()),
        )
    }

    fn create_historic_job_log_query(&self) -> Box<dyn HistoricJobLogQuery + Send> {
        Box::new(
            RecordingJobLogQuery::new(self.recorder.clone())
                .with_items(self.fixtures.job_logs.clone()),
        )
    }

    fn create_historic_task_instance_query(&self) -> Box<dyn HistoricTaskInstanceQuery + Send> {
        Box::new(
            RecordingTaskInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.task_instances.clone()),
        )
    }

    fn create_historic_variable_instance_query(
        &self,
    ) -> Box<dyn HistoricVariableInstanceQuery + Send> {
        Box::new(
            RecordingVariableInstanceQuery::new(self.recorder.clone())
                .with_items(self.fixtures.variable_instances.clone()),
        )
    }

    fn historic_process_instance(
        &self,
        id: &str,
    ) -> EngineResult<Option<HistoricProcessInstance>> {
        Ok(self
            .fixtures
            .process_instances
            .iter()
            .find(|instance| instance.id == id)
            .cloned())
    }

    fn historic_variable_instance(
        &self,
        id: &str,
        _deserialize_value: bool,
    ) -> EngineResult<Option<HistoricVariableInstance>> {
        Ok(self
            .fixtures
            .variable_instances
            .iter()
            .find(|instance| instance.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::HistoricProcessInstanceQuery as _;

    #[test]
    fn test_records_calls_in_order() {
        let recorder = Recorder::new();
        let mut query = RecordingProcessInstanceQuery::new(recorder.clone());

        query.process_definition_key("invoice".to_string()).unwrap();
        query.finished().unwrap();
        query.order_by_process_instance_start_time().unwrap();
        query.desc().unwrap();
        query.list_page(5, 20).unwrap();

        assert_eq!(
            recorder.log().method_names(),
            vec![
                "processDefinitionKey",
                "finished",
                "orderByProcessInstanceStartTime",
                "desc",
                "listPage"
            ]
        );
        assert_eq!(
            recorder.log().calls().last().unwrap().args,
            vec![json!(5), json!(20)]
        );
    }

    #[test]
    fn test_fail_on_returns_error_after_recording() {
        let recorder = Recorder::new();
        recorder.fail_on("suspended", EngineError::validation("mutually exclusive"));
        let mut query = RecordingProcessInstanceQuery::new(recorder.clone());

        query.active().unwrap();
        let err = query.suspended().unwrap_err();

        assert_eq!(err, EngineError::validation("mutually exclusive"));
        assert_eq!(recorder.log().method_names(), vec!["active", "suspended"]);
    }

    #[test]
    fn test_service_serves_fixtures() {
        let service = RecordingHistoryService::with_fixtures(Fixtures {
            process_instances: vec![HistoricProcessInstance {
                id: "anId".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });

        let mut query = service.create_historic_process_instance_query();
        let items = query.list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "anId");

        let found = service.historic_process_instance("anId").unwrap();
        assert!(found.is_some());
        let missing = service.historic_process_instance("unknown").unwrap();
        assert!(missing.is_none());
    }
}
