//! Historic process instance endpoint.
//!
//! - `GET /history/process-instance` - query with URL parameters
//! - `POST /history/process-instance` - query with a JSON body
//! - `GET|POST /history/process-instance/count` - count matches
//! - `GET /history/process-instance/{id}` - singleton lookup

use axum::{
    Json,
    extract::{Path, State},
};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricProcessInstance;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::process_instance;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_process_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricProcessInstance>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_process_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricProcessInstance>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_process_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_process_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the singleton lookup.
pub async fn get_process_instance<E: HistoryService>(
    State(state): State<AppState<E>>,
    Path(id): Path<String>,
) -> RestResult<Json<HistoricProcessInstance>> {
    let instance = state.engine().historic_process_instance(&id)?.ok_or_else(|| {
        RestError::not_found(format!("Historic process instance with id {id} does not exist"))
    })?;
    Ok(Json(instance))
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricProcessInstance>>> {
    debug!(params = params.len(), "historic process instance query");
    let mut query = state.engine().create_historic_process_instance_query();
    let instances = process_instance::list(params, &mut *query)?;
    Ok(Json(instances))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic process instance count");
    let mut query = state.engine().create_historic_process_instance_query();
    let count = process_instance::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
