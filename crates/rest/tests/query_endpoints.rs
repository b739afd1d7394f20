//! End-to-end tests for the history query endpoints.
//!
//! Each test drives a real HTTP request through the router and asserts
//! the JSON payload, the status code, and the ordered builder-call
//! sequence recorded by the engine.

mod common;

use chrono::DateTime;
use serde_json::{Value, json};

use common::harness::HistoryTestHarness;
use flowtrace_engine::recording::Fixtures;
use flowtrace_engine::entities::{HistoricProcessInstance, HistoricVariableInstance};

fn process_instance_fixture() -> HistoricProcessInstance {
    HistoricProcessInstance {
        id: "anInstanceId".to_string(),
        business_key: Some("aBusinessKey".to_string()),
        process_definition_key: Some("invoice".to_string()),
        start_time: Some(
            DateTime::parse_from_rfc3339("2013-01-23T13:42:45.000+02:00").unwrap(),
        ),
        duration_in_millis: Some(2000),
        state: Some("COMPLETED".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn get_process_instances_returns_camel_case_payload() {
    let harness = HistoryTestHarness::with_fixtures(Fixtures {
        process_instances: vec![process_instance_fixture()],
        ..Default::default()
    });

    let response = harness.server.get("/history/process-instance").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "anInstanceId");
    assert_eq!(body[0]["businessKey"], "aBusinessKey");
    assert_eq!(body[0]["processDefinitionKey"], "invoice");
    assert_eq!(body[0]["durationInMillis"], 2000);
    assert_eq!(harness.methods(), vec!["list"]);
}

#[tokio::test]
async fn sorted_page_produces_the_documented_call_sequence() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .get("/history/process-instance")
        .add_query_param("sortBy", "startTime")
        .add_query_param("sortOrder", "desc")
        .add_query_param("firstResult", "5")
        .add_query_param("maxResults", "20")
        .await;

    response.assert_status_ok();
    assert_eq!(
        harness.methods(),
        vec!["orderByProcessInstanceStartTime", "desc", "listPage"]
    );
    assert_eq!(
        harness.calls().last().unwrap().args,
        vec![json!(5), json!(20)]
    );
}

#[tokio::test]
async fn get_and_post_drive_identical_call_sequences() {
    let harness = HistoryTestHarness::new();

    harness
        .server
        .get("/history/process-instance")
        .add_query_param("processDefinitionKey", "invoice")
        .add_query_param("tenantIdIn", "tenantOne,tenantTwo")
        .add_query_param("finished", "true")
        .add_query_param("sortBy", "businessKey")
        .add_query_param("sortOrder", "asc")
        .await
        .assert_status_ok();
    let from_get = harness.calls();
    harness.clear();

    harness
        .server
        .post("/history/process-instance")
        .json(&json!({
            "processDefinitionKey": "invoice",
            "tenantIdIn": ["tenantOne", "tenantTwo"],
            "finished": true,
            "sortBy": "businessKey",
            "sortOrder": "asc"
        }))
        .await
        .assert_status_ok();
    let from_post = harness.calls();

    assert_eq!(from_get, from_post);
}

#[tokio::test]
async fn count_returns_count_payload() {
    let harness = HistoryTestHarness::with_fixtures(Fixtures {
        process_instances: vec![process_instance_fixture()],
        ..Default::default()
    });

    let response = harness
        .server
        .get("/history/process-instance/count")
        .add_query_param("finished", "true")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"count": 1}));
    assert_eq!(harness.methods(), vec!["finished", "count"]);
}

#[tokio::test]
async fn post_count_accepts_empty_body() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .post("/history/process-instance/count")
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    assert_eq!(harness.methods(), vec!["count"]);
}

#[tokio::test]
async fn structured_sorting_establishes_secondary_precedence() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .post("/history/case-instance")
        .json(&json!({
            "sorting": [
                {"sortBy": "businessKey", "sortOrder": "desc"},
                {"sortBy": "closeTime", "sortOrder": "asc"}
            ]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        harness.methods(),
        vec![
            "orderByCaseInstanceBusinessKey",
            "desc",
            "orderByCaseInstanceCloseTime",
            "asc",
            "list"
        ]
    );
}

#[tokio::test]
async fn task_endpoint_dispatches_both_variable_families() {
    let harness = HistoryTestHarness::new();

    let response = harness
        .server
        .post("/history/task")
        .json(&json!({
            "taskVariables": [{"name": "local", "operator": "eq", "value": "x"}],
            "processVariables": [{"name": "amount", "operator": "gteq", "value": 5}]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        harness.methods(),
        vec![
            "taskVariableValueEquals",
            "processVariableValueGreaterThanOrEqual",
            "list"
        ]
    );
    assert_eq!(
        harness.calls()[1].args,
        vec![json!("amount"), json!(5)]
    );
}

#[tokio::test]
async fn variable_instances_suppress_binary_fetching() {
    let harness = HistoryTestHarness::new();

    harness
        .server
        .get("/history/variable-instance")
        .await
        .assert_status_ok();
    assert_eq!(harness.methods(), vec!["disableBinaryFetching", "list"]);
    harness.clear();

    harness
        .server
        .get("/history/variable-instance")
        .add_query_param("deserializeValues", "false")
        .await
        .assert_status_ok();
    assert_eq!(
        harness.methods(),
        vec![
            "disableBinaryFetching",
            "disableCustomObjectDeserialization",
            "list"
        ]
    );
}

#[tokio::test]
async fn process_instance_singleton_lookup() {
    let harness = HistoryTestHarness::with_fixtures(Fixtures {
        process_instances: vec![process_instance_fixture()],
        ..Default::default()
    });

    let response = harness
        .server
        .get("/history/process-instance/anInstanceId")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], "anInstanceId");

    let response = harness
        .server
        .get("/history/process-instance/unknownId")
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["type"], "NotFound");
    assert_eq!(
        body["message"],
        "Historic process instance with id unknownId does not exist"
    );
}

#[tokio::test]
async fn variable_instance_singleton_lookup() {
    let harness = HistoryTestHarness::with_fixtures(Fixtures {
        variable_instances: vec![HistoricVariableInstance {
            id: "aVariableId".to_string(),
            name: Some("amount".to_string()),
            type_name: Some("Long".to_string()),
            value: Some(json!(5)),
            ..Default::default()
        }],
        ..Default::default()
    });

    let response = harness
        .server
        .get("/history/variable-instance/aVariableId")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "amount");
    assert_eq!(body["type"], "Long");
    assert_eq!(body["value"], 5);

    let response = harness
        .server
        .get("/history/variable-instance/unknownId")
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn every_collection_endpoint_answers_get_and_post() {
    let endpoints = [
        "/history/process-instance",
        "/history/activity-instance",
        "/history/case-instance",
        "/history/decision-instance",
        "/history/detail",
        "/history/incident",
        "/history/job-log",
        "/history/task",
        "/history/variable-instance",
    ];
    let harness = HistoryTestHarness::new();

    for endpoint in endpoints {
        harness.server.get(endpoint).await.assert_status_ok();
        harness
            .server
            .post(endpoint)
            .json(&json!({}))
            .await
            .assert_status_ok();
        harness
            .server
            .get(&format!("{endpoint}/count"))
            .await
            .assert_status_ok();
        harness
            .server
            .post(&format!("{endpoint}/count"))
            .json(&json!({}))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn health_endpoint() {
    let harness = HistoryTestHarness::new();
    let response = harness.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "UP");
}
