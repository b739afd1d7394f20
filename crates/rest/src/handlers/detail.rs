//! Historic detail endpoint.
//!
//! - `GET|POST /history/detail`
//! - `GET|POST /history/detail/count`

use axum::{Json, extract::State};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricDetail;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::detail;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_details<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricDetail>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_details<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricDetail>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_details_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_details_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricDetail>>> {
    debug!(params = params.len(), "historic detail query");
    let mut query = state.engine().create_historic_detail_query();
    let details = detail::list(params, &mut *query)?;
    Ok(Json(details))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic detail count");
    let mut query = state.engine().create_historic_detail_query();
    let count = detail::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
