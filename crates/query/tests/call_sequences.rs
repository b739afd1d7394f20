//! Call-sequence tests for the translation core.
//!
//! These tests drive endpoint descriptors against recording builders and
//! assert the exact ordered sequence of builder calls a request produces:
//! transport equivalence, sort precedence, pagination defaulting, flag
//! semantics, variable operator dispatch, and pre-fetch toggles.

use serde_json::{Map, Value, json};

use flowtrace_engine::EngineError;
use flowtrace_engine::recording::{
    Recorder, RecordingCaseInstanceQuery, RecordingIncidentQuery, RecordingJobLogQuery,
    RecordingProcessInstanceQuery, RecordingTaskInstanceQuery, RecordingVariableInstanceQuery,
};
use flowtrace_query::endpoints::{
    case_instance, incident, job_log, process_instance, task_instance, variable_instance,
};
use flowtrace_query::{InvalidRequest, ParameterMap, QueryError};

fn query_params(pairs: &[(&str, &str)]) -> ParameterMap {
    ParameterMap::from_query_pairs(pairs.iter().map(|(k, v)| (*k, *v)))
}

fn body_params(body: Value) -> ParameterMap {
    let Value::Object(object) = body else {
        panic!("test body must be a JSON object");
    };
    ParameterMap::from_json_object(object)
}

fn empty_body() -> Map<String, Value> {
    Map::new()
}

#[test]
fn worked_example_sorted_page() {
    // GET ?sortBy=startTime&sortOrder=desc&firstResult=5&maxResults=20
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[
        ("sortBy", "startTime"),
        ("sortOrder", "desc"),
        ("firstResult", "5"),
        ("maxResults", "20"),
    ]);

    process_instance::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec!["orderByProcessInstanceStartTime", "desc", "listPage"]
    );
    assert_eq!(
        recorder.log().calls().last().unwrap().args,
        vec![json!(5), json!(20)]
    );
}

#[test]
fn transport_equivalence_for_filters_and_sorting() {
    let recorder_get = Recorder::new();
    let mut query_get = RecordingProcessInstanceQuery::new(recorder_get.clone());
    let get_params = query_params(&[
        ("processDefinitionKey", "invoice"),
        ("tenantIdIn", "tenantOne,tenantTwo"),
        ("finished", "true"),
        ("startedBefore", "2013-01-23T13:42:45.000+0200"),
        ("sortBy", "businessKey"),
        ("sortOrder", "asc"),
    ]);
    process_instance::list(&get_params, &mut query_get).unwrap();

    let recorder_post = Recorder::new();
    let mut query_post = RecordingProcessInstanceQuery::new(recorder_post.clone());
    let post_params = body_params(json!({
        "processDefinitionKey": "invoice",
        "tenantIdIn": ["tenantOne", "tenantTwo"],
        "finished": true,
        "startedBefore": "2013-01-23T13:42:45.000+0200",
        "sortBy": "businessKey",
        "sortOrder": "asc"
    }));
    process_instance::list(&post_params, &mut query_post).unwrap();

    assert_eq!(recorder_get.log().calls(), recorder_post.log().calls());
}

#[test]
fn filters_apply_in_table_order_regardless_of_request_order() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    // Request order is reversed relative to the table.
    let params = query_params(&[
        ("unfinished", "true"),
        ("processInstanceId", "anId"),
        ("processDefinitionKey", "invoice"),
    ]);

    process_instance::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec![
            "processInstanceId",
            "processDefinitionKey",
            "unfinished",
            "list"
        ]
    );
}

#[test]
fn boolean_flag_monotonicity() {
    // false and absent are both no-ops; true fires exactly once.
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[("finished", "false")]);
    process_instance::list(&params, &mut query).unwrap();
    assert_eq!(recorder.log().method_names(), vec!["list"]);

    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[("finished", "true")]);
    process_instance::list(&params, &mut query).unwrap();
    assert_eq!(recorder.log().method_names(), vec!["finished", "list"]);
}

#[test]
fn string_list_passes_elements_through() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[("processInstanceIds", "firstId,secondId")]);

    process_instance::list(&params, &mut query).unwrap();

    let calls = recorder.log().calls();
    assert_eq!(calls[0].method, "processInstanceIds");
    assert_eq!(calls[0].args, vec![json!(["firstId", "secondId"])]);
}

#[test]
fn pagination_defaults_apply_independently() {
    // Only maxResults: firstResult defaults to 0.
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    process_instance::list(&query_params(&[("maxResults", "10")]), &mut query).unwrap();
    assert_eq!(
        recorder.log().calls()[0].args,
        vec![json!(0), json!(10)]
    );

    // Only firstResult: maxResults defaults to the maximum integer.
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    process_instance::list(&query_params(&[("firstResult", "10")]), &mut query).unwrap();
    assert_eq!(
        recorder.log().calls()[0].args,
        vec![json!(10), json!(i32::MAX)]
    );

    // Neither: the unpaged list() terminal operation.
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    process_instance::list(&ParameterMap::new(), &mut query).unwrap();
    assert_eq!(recorder.log().method_names(), vec!["list"]);
}

#[test]
fn sort_completeness_over_the_whole_table() {
    // Every sort key, in both directions, produces exactly
    // [orderBy, direction] and nothing else.
    for mapping in process_instance::SORT_KEYS {
        for (direction, expected) in [("asc", "asc"), ("desc", "desc")] {
            let recorder = Recorder::new();
            let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
            let params = query_params(&[("sortBy", mapping.key), ("sortOrder", direction)]);

            process_instance::list(&params, &mut query).unwrap();

            let methods = recorder.log().method_names();
            assert_eq!(methods.len(), 3, "unexpected calls for key {}", mapping.key);
            assert!(methods[0].starts_with("order"));
            assert_eq!(methods[1], expected);
            assert_eq!(methods[2], "list");
        }
    }
}

#[test]
fn sort_pairing_invariant() {
    for pair in [
        vec![("sortBy", "startTime")],
        vec![("sortOrder", "asc")],
    ] {
        let recorder = Recorder::new();
        let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
        let err = process_instance::list(&query_params(&pair), &mut query).unwrap_err();
        assert_eq!(
            err,
            QueryError::Invalid(InvalidRequest::IncompleteSortSpecification)
        );
        assert!(recorder.log().calls().is_empty());
    }
}

#[test]
fn unknown_sort_key_and_direction_are_rejected_before_any_call() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let err = process_instance::list(
        &query_params(&[("sortBy", "anInvalidSortByOption"), ("sortOrder", "asc")]),
        &mut query,
    )
    .unwrap_err();
    assert_eq!(
        err,
        QueryError::Invalid(InvalidRequest::UnknownSortKey(
            "anInvalidSortByOption".to_string()
        ))
    );
    assert!(recorder.log().calls().is_empty());

    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let err = process_instance::list(
        &query_params(&[("sortBy", "startTime"), ("sortOrder", "anInvalidSortOrderOption")]),
        &mut query,
    )
    .unwrap_err();
    assert_eq!(
        err,
        QueryError::Invalid(InvalidRequest::InvalidSortDirection(
            "anInvalidSortOrderOption".to_string()
        ))
    );
    assert!(recorder.log().calls().is_empty());
}

#[test]
fn secondary_sort_ordering_follows_list_order() {
    let recorder = Recorder::new();
    let mut query = RecordingCaseInstanceQuery::new(recorder.clone());
    let params = body_params(json!({
        "sorting": [
            {"sortBy": "businessKey", "sortOrder": "desc"},
            {"sortBy": "closeTime", "sortOrder": "asc"}
        ]
    }));

    case_instance::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec![
            "orderByCaseInstanceBusinessKey",
            "desc",
            "orderByCaseInstanceCloseTime",
            "asc",
            "list"
        ]
    );

    // Reversing the list reverses the call sequence.
    let recorder = Recorder::new();
    let mut query = RecordingCaseInstanceQuery::new(recorder.clone());
    let params = body_params(json!({
        "sorting": [
            {"sortBy": "closeTime", "sortOrder": "asc"},
            {"sortBy": "businessKey", "sortOrder": "desc"}
        ]
    }));
    case_instance::list(&params, &mut query).unwrap();
    assert_eq!(
        recorder.log().method_names(),
        vec![
            "orderByCaseInstanceCloseTime",
            "asc",
            "orderByCaseInstanceBusinessKey",
            "desc",
            "list"
        ]
    );
}

#[test]
fn invalid_second_criterion_applies_nothing() {
    let recorder = Recorder::new();
    let mut query = RecordingCaseInstanceQuery::new(recorder.clone());
    let params = body_params(json!({
        "sorting": [
            {"sortBy": "businessKey", "sortOrder": "desc"},
            {"sortBy": "anInvalidSortByOption", "sortOrder": "asc"}
        ]
    }));

    let err = case_instance::list(&params, &mut query).unwrap_err();

    assert_eq!(
        err,
        QueryError::Invalid(InvalidRequest::UnknownSortKey(
            "anInvalidSortByOption".to_string()
        ))
    );
    assert!(recorder.log().calls().is_empty());
}

#[test]
fn variable_operator_round_trip() {
    let cases = [
        ("eq", "variableValueEquals"),
        ("neq", "variableValueNotEquals"),
        ("gt", "variableValueGreaterThan"),
        ("gteq", "variableValueGreaterThanOrEqual"),
        ("lt", "variableValueLessThan"),
        ("lteq", "variableValueLessThanOrEqual"),
        ("like", "variableValueLike"),
    ];
    for (token, method) in cases {
        let recorder = Recorder::new();
        let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
        let expression = format!("aVariable_{token}_aValue");
        let params = query_params(&[("variables", &expression)]);

        process_instance::list(&params, &mut query).unwrap();

        let calls = recorder.log().calls();
        assert_eq!(calls[0].method, method);
        assert_eq!(calls[0].args, vec![json!("aVariable"), json!("aValue")]);
    }
}

#[test]
fn variable_expression_failures() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let err = process_instance::list(
        &query_params(&[("variables", "invalidFormattedVariableQuery")]),
        &mut query,
    )
    .unwrap_err();
    assert_eq!(err, QueryError::Invalid(InvalidRequest::MalformedExpression));

    let err = process_instance::list(
        &query_params(&[("variables", "aVariable_anInvalidComparator_aValue")]),
        &mut query,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid variable comparator specified: anInvalidComparator"
    );

    // One bad expression fails the whole comma-separated parameter.
    let err = process_instance::list(
        &query_params(&[("variables", "a_eq_1,invalidFormattedVariableQuery")]),
        &mut query,
    )
    .unwrap_err();
    assert_eq!(err, QueryError::Invalid(InvalidRequest::MalformedExpression));
}

#[test]
fn structured_variables_carry_native_values() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = body_params(json!({
        "variables": [{"name": "amount", "operator": "gteq", "value": 5}]
    }));

    process_instance::list(&params, &mut query).unwrap();

    let calls = recorder.log().calls();
    assert_eq!(calls[0].method, "variableValueGreaterThanOrEqual");
    assert_eq!(calls[0].args, vec![json!("amount"), json!(5)]);
}

#[test]
fn ignore_case_toggles_fire_once_each() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[
        ("variables", "a_eq_1,b_eq_2"),
        ("variableNamesIgnoreCase", "true"),
        ("variableValuesIgnoreCase", "true"),
    ]);

    process_instance::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec![
            "matchVariableNamesIgnoreCase",
            "matchVariableValuesIgnoreCase",
            "variableValueEquals",
            "variableValueEquals",
            "list"
        ]
    );
}

#[test]
fn process_variables_use_process_variable_wording() {
    let recorder = Recorder::new();
    let mut query = RecordingTaskInstanceQuery::new(recorder.clone());
    let err = task_instance::list(
        &query_params(&[("processVariables", "aVariable_anInvalidComparator_aValue")]),
        &mut query,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid process variable comparator specified: anInvalidComparator"
    );
}

#[test]
fn task_and_process_variables_dispatch_to_their_families() {
    let recorder = Recorder::new();
    let mut query = RecordingTaskInstanceQuery::new(recorder.clone());
    let params = body_params(json!({
        "taskVariables": [{"name": "local", "operator": "eq", "value": "x"}],
        "processVariables": [{"name": "global", "operator": "neq", "value": "y"}]
    }));

    task_instance::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec![
            "taskVariableValueEquals",
            "processVariableValueNotEquals",
            "list"
        ]
    );
}

#[test]
fn number_filters_take_thresholds() {
    let recorder = Recorder::new();
    let mut query = RecordingJobLogQuery::new(recorder.clone());
    let params = query_params(&[
        ("jobPriorityHigherThanOrEquals", "7"),
        ("jobPriorityLowerThanOrEquals", "30"),
    ]);

    job_log::list(&params, &mut query).unwrap();

    let calls = recorder.log().calls();
    assert_eq!(calls[0].method, "jobPriorityHigherThanOrEquals");
    assert_eq!(calls[0].args, vec![json!(7)]);
    assert_eq!(calls[1].method, "jobPriorityLowerThanOrEquals");
    assert_eq!(calls[1].args, vec![json!(30)]);
}

#[test]
fn unparsable_date_names_the_parameter() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let err = process_instance::list(
        &query_params(&[("startedBefore", "definitelyNotADate")]),
        &mut query,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot convert value \"definitelyNotADate\" of parameter \"startedBefore\" to a date"
    );
}

#[test]
fn unknown_parameters_are_ignored() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[("aFutureParameter", "aValue")]);

    process_instance::list(&params, &mut query).unwrap();

    assert_eq!(recorder.log().method_names(), vec!["list"]);
}

#[test]
fn count_applies_filters_but_no_prefetch_toggles() {
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    let params = query_params(&[("variableName", "aName")]);

    let n = variable_instance::count(&params, &mut query).unwrap();

    assert_eq!(n, 0);
    assert_eq!(recorder.log().method_names(), vec!["variableName", "count"]);
}

#[test]
fn variable_instance_prefetch_toggles() {
    // Binary fetching is always suppressed on list requests.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    variable_instance::list(&ParameterMap::new(), &mut query).unwrap();
    assert_eq!(
        recorder.log().method_names(),
        vec!["disableBinaryFetching", "list"]
    );

    // deserializeValues=false additionally disables deserialization.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    variable_instance::list(&query_params(&[("deserializeValues", "false")]), &mut query).unwrap();
    assert_eq!(
        recorder.log().method_names(),
        vec![
            "disableBinaryFetching",
            "disableCustomObjectDeserialization",
            "list"
        ]
    );

    // deserializeValues=true behaves like the default.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    variable_instance::list(&query_params(&[("deserializeValues", "true")]), &mut query).unwrap();
    assert_eq!(
        recorder.log().method_names(),
        vec!["disableBinaryFetching", "list"]
    );
}

#[test]
fn variable_name_and_value_pairing() {
    // Name alone filters by name.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    variable_instance::list(&query_params(&[("variableName", "aName")]), &mut query).unwrap();
    assert_eq!(
        recorder.log().method_names(),
        vec!["variableName", "disableBinaryFetching", "list"]
    );

    // Name plus value becomes one equality comparison.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    variable_instance::list(
        &query_params(&[("variableName", "aName"), ("variableValue", "aValue")]),
        &mut query,
    )
    .unwrap();
    let calls = recorder.log().calls();
    assert_eq!(calls[0].method, "variableValueEquals");
    assert_eq!(calls[0].args, vec![json!("aName"), json!("aValue")]);

    // Value without name is invalid.
    let recorder = Recorder::new();
    let mut query = RecordingVariableInstanceQuery::new(recorder.clone());
    let err = variable_instance::list(&query_params(&[("variableValue", "aValue")]), &mut query)
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::Invalid(InvalidRequest::IncompleteVariableValue)
    );
    assert!(recorder.log().calls().is_empty());
}

#[test]
fn independent_incident_message_sort_key() {
    let recorder = Recorder::new();
    let mut query = RecordingIncidentQuery::new(recorder.clone());
    let params = query_params(&[("sortBy", "incidentMessage"), ("sortOrder", "asc")]);

    incident::list(&params, &mut query).unwrap();

    assert_eq!(
        recorder.log().method_names(),
        vec!["orderByIncidentMessage", "asc", "list"]
    );
}

#[test]
fn engine_validation_failure_propagates_mid_dispatch() {
    let recorder = Recorder::new();
    recorder.fail_on(
        "suspended",
        EngineError::validation("active and suspended are mutually exclusive"),
    );
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = query_params(&[("active", "true"), ("suspended", "true")]);

    let err = process_instance::list(&params, &mut query).unwrap_err();

    assert_eq!(
        err,
        QueryError::Engine(EngineError::validation(
            "active and suspended are mutually exclusive"
        ))
    );
    // Dispatch stopped at the failing call.
    assert_eq!(recorder.log().method_names(), vec!["active", "suspended"]);
}

#[test]
fn empty_body_object_lists_everything() {
    let recorder = Recorder::new();
    let mut query = RecordingProcessInstanceQuery::new(recorder.clone());
    let params = ParameterMap::from_json_object(empty_body());

    process_instance::list(&params, &mut query).unwrap();

    assert_eq!(recorder.log().method_names(), vec!["list"]);
}
