//! Historic job log endpoint.
//!
//! - `GET|POST /history/job-log`
//! - `GET|POST /history/job-log/count`

use axum::{Json, extract::State};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricJobLog;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::job_log;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_job_logs<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricJobLog>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_job_logs<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricJobLog>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_job_logs_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_job_logs_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricJobLog>>> {
    debug!(params = params.len(), "historic job log query");
    let mut query = state.engine().create_historic_job_log_query();
    let logs = job_log::list(params, &mut *query)?;
    Ok(Json(logs))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic job log count");
    let mut query = state.engine().create_historic_job_log_query();
    let count = job_log::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
