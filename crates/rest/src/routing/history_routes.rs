//! History API route configuration.
//!
//! Defines all routes of the history query API.

use axum::{Router, routing::get};
use flowtrace_engine::HistoryService;

use crate::handlers;
use crate::state::AppState;

/// Creates all history REST API routes.
///
/// # Routes
///
/// Every endpoint answers `GET` (query parameters) and `POST` (JSON
/// body) on its collection path and on `<path>/count`:
///
/// - `/history/process-instance` (+ `/{id}` singleton)
/// - `/history/activity-instance`
/// - `/history/case-instance`
/// - `/history/decision-instance`
/// - `/history/detail`
/// - `/history/incident`
/// - `/history/job-log`
/// - `/history/task`
/// - `/history/variable-instance` (+ `/{id}` singleton)
///
/// Plus `GET /health`.
pub fn create_routes<E>(state: AppState<E>) -> Router
where
    E: HistoryService + 'static,
{
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        // Process instances
        .route(
            "/history/process-instance",
            get(handlers::process_instance::get_process_instances::<E>)
                .post(handlers::process_instance::query_process_instances::<E>),
        )
        .route(
            "/history/process-instance/count",
            get(handlers::process_instance::get_process_instances_count::<E>)
                .post(handlers::process_instance::query_process_instances_count::<E>),
        )
        .route(
            "/history/process-instance/{id}",
            get(handlers::process_instance::get_process_instance::<E>),
        )
        // Activity instances
        .route(
            "/history/activity-instance",
            get(handlers::activity_instance::get_activity_instances::<E>)
                .post(handlers::activity_instance::query_activity_instances::<E>),
        )
        .route(
            "/history/activity-instance/count",
            get(handlers::activity_instance::get_activity_instances_count::<E>)
                .post(handlers::activity_instance::query_activity_instances_count::<E>),
        )
        // Case instances
        .route(
            "/history/case-instance",
            get(handlers::case_instance::get_case_instances::<E>)
                .post(handlers::case_instance::query_case_instances::<E>),
        )
        .route(
            "/history/case-instance/count",
            get(handlers::case_instance::get_case_instances_count::<E>)
                .post(handlers::case_instance::query_case_instances_count::<E>),
        )
        // Decision instances
        .route(
            "/history/decision-instance",
            get(handlers::decision_instance::get_decision_instances::<E>)
                .post(handlers::decision_instance::query_decision_instances::<E>),
        )
        .route(
            "/history/decision-instance/count",
            get(handlers::decision_instance::get_decision_instances_count::<E>)
                .post(handlers::decision_instance::query_decision_instances_count::<E>),
        )
        // Details
        .route(
            "/history/detail",
            get(handlers::detail::get_details::<E>).post(handlers::detail::query_details::<E>),
        )
        .route(
            "/history/detail/count",
            get(handlers::detail::get_details_count::<E>)
                .post(handlers::detail::query_details_count::<E>),
        )
        // Incidents
        .route(
            "/history/incident",
            get(handlers::incident::get_incidents::<E>)
                .post(handlers::incident::query_incidents::<E>),
        )
        .route(
            "/history/incident/count",
            get(handlers::incident::get_incidents_count::<E>)
                .post(handlers::incident::query_incidents_count::<E>),
        )
        // Job logs
        .route(
            "/history/job-log",
            get(handlers::job_log::get_job_logs::<E>).post(handlers::job_log::query_job_logs::<E>),
        )
        .route(
            "/history/job-log/count",
            get(handlers::job_log::get_job_logs_count::<E>)
                .post(handlers::job_log::query_job_logs_count::<E>),
        )
        // Task instances
        .route(
            "/history/task",
            get(handlers::task_instance::get_task_instances::<E>)
                .post(handlers::task_instance::query_task_instances::<E>),
        )
        .route(
            "/history/task/count",
            get(handlers::task_instance::get_task_instances_count::<E>)
                .post(handlers::task_instance::query_task_instances_count::<E>),
        )
        // Variable instances
        .route(
            "/history/variable-instance",
            get(handlers::variable_instance::get_variable_instances::<E>)
                .post(handlers::variable_instance::query_variable_instances::<E>),
        )
        .route(
            "/history/variable-instance/count",
            get(handlers::variable_instance::get_variable_instances_count::<E>)
                .post(handlers::variable_instance::query_variable_instances_count::<E>),
        )
        .route(
            "/history/variable-instance/{id}",
            get(handlers::variable_instance::get_variable_instance::<E>),
        )
        // State
        .with_state(state)
}
