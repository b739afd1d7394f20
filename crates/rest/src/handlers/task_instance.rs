//! Historic task instance endpoint.
//!
//! - `GET|POST /history/task`
//! - `GET|POST /history/task/count`

use axum::{Json, extract::State};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricTaskInstance;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::task_instance;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_task_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricTaskInstance>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_task_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricTaskInstance>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_task_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_task_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricTaskInstance>>> {
    debug!(params = params.len(), "historic task instance query");
    let mut query = state.engine().create_historic_task_instance_query();
    let tasks = task_instance::list(params, &mut *query)?;
    Ok(Json(tasks))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic task instance count");
    let mut query = state.engine().create_historic_task_instance_query();
    let count = task_instance::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
