//! Historic incident endpoint.
//!
//! - `GET|POST /history/incident`
//! - `GET|POST /history/incident/count`

use axum::{Json, extract::State};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricIncident;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::incident;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_incidents<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricIncident>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_incidents<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricIncident>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_incidents_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_incidents_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricIncident>>> {
    debug!(params = params.len(), "historic incident query");
    let mut query = state.engine().create_historic_incident_query();
    let incidents = incident::list(params, &mut *query)?;
    Ok(Json(incidents))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic incident count");
    let mut query = state.engine().create_historic_incident_query();
    let count = incident::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
