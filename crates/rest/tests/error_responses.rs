//! Error-path tests: every rejection carries `{"type", "message"}` and
//! the status mapping of the error model.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::harness::HistoryTestHarness;
use flowtrace_engine::EngineError;

#[tokio::test]
async fn lone_sorting_parameter_is_rejected() {
    let harness = HistoryTestHarness::new();

    for (name, value) in [("sortBy", "startTime"), ("sortOrder", "asc")] {
        let response = harness
            .server
            .get("/history/process-instance")
            .add_query_param(name, value)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["type"], "IncompleteSortSpecification");
        assert_eq!(
            body["message"],
            "Only a single sorting parameter specified. sortBy and sortOrder required"
        );
    }
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn invalid_sorting_options_are_rejected() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("sortBy", "anInvalidSortByOption")
        .add_query_param("sortOrder", "asc")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "UnknownSortKey");
    assert_eq!(
        body["message"],
        "sortBy parameter has invalid value: anInvalidSortByOption"
    );

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("sortBy", "startTime")
        .add_query_param("sortOrder", "anInvalidSortOrderOption")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "InvalidSortDirection");
}

#[tokio::test]
async fn malformed_variable_expression() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("variables", "invalidFormattedVariableQuery")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "MalformedExpression");
    assert_eq!(
        body["message"],
        "variable query parameter has to have format KEY_OPERATOR_VALUE"
    );
}

#[tokio::test]
async fn unknown_variable_comparators_per_scope() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("variables", "aVariable_anInvalidComparator_aValue")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "UnknownOperator");
    assert_eq!(
        body["message"],
        "Invalid variable comparator specified: anInvalidComparator"
    );

    let response = harness
        .server
        .get("/history/task")
        .add_query_param("processVariables", "aVariable_anInvalidComparator_aValue")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Invalid process variable comparator specified: anInvalidComparator"
    );
}

#[tokio::test]
async fn unparsable_date_names_the_parameter() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("startedBefore", "definitelyNotADate")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "UnparsableDate");
    assert_eq!(
        body["message"],
        "Cannot convert value \"definitelyNotADate\" of parameter \"startedBefore\" to a date"
    );
}

#[tokio::test]
async fn variable_value_without_name_is_rejected() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/variable-instance")
        .add_query_param("variableValue", "aValue")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "IncompleteVariableValue");
    assert_eq!(
        body["message"],
        "Only a single variable value parameter specified: variable name and value are required to be able to query after a specific variable value."
    );
}

#[tokio::test]
async fn engine_validation_failure_maps_to_bad_request() {
    let harness = HistoryTestHarness::new();
    harness.engine.recorder().fail_on(
        "suspended",
        EngineError::validation("active and suspended are mutually exclusive"),
    );

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("active", "true")
        .add_query_param("suspended", "true")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "EngineValidationFailure");
    assert_eq!(
        body["message"],
        "active and suspended are mutually exclusive"
    );
}

#[tokio::test]
async fn engine_authorization_failure_maps_to_forbidden() {
    let harness = HistoryTestHarness::new();
    harness
        .engine
        .recorder()
        .fail_on("count", EngineError::authorization("not allowed to read history"));

    let response = harness.server.get("/history/process-instance/count").await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["type"], "EngineAuthorizationFailure");
    assert_eq!(body["message"], "not allowed to read history");
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .post("/history/process-instance")
        .json(&json!(["not", "an", "object"]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "InvalidRequest");
    assert_eq!(body["message"], "Request body must be a JSON object");
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .post("/history/process-instance")
        .text("{definitely not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "InvalidRequest");
    assert_eq!(body["message"], "Invalid JSON request body");
}

#[tokio::test]
async fn unparsable_pagination_bound_is_rejected() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("firstResult", "many")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], "InvalidParameterValue");
}
