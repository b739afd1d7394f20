//! Historic case instance endpoint.
//!
//! - `GET|POST /history/case-instance`
//! - `GET|POST /history/case-instance/count`

use axum::{Json, extract::State};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricCaseInstance;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::case_instance;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_case_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricCaseInstance>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_case_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricCaseInstance>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_case_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_case_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricCaseInstance>>> {
    debug!(params = params.len(), "historic case instance query");
    let mut query = state.engine().create_historic_case_instance_query();
    let instances = case_instance::list(params, &mut *query)?;
    Ok(Json(instances))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic case instance count");
    let mut query = state.engine().create_historic_case_instance_query();
    let count = case_instance::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
