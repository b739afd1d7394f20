//! Historic variable instance endpoint.
//!
//! - `GET|POST /history/variable-instance`
//! - `GET|POST /history/variable-instance/count`
//! - `GET /history/variable-instance/{id}` - singleton lookup honoring
//!   `deserializeValues`

use axum::{
    Json,
    extract::{Path, State},
};
use flowtrace_engine::HistoryService;
use flowtrace_engine::entities::HistoricVariableInstance;
use flowtrace_query::ParameterMap;
use flowtrace_query::endpoints::variable_instance;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{QueryDocument, QueryString};
use crate::responses::CountResult;
use crate::state::AppState;

/// Handler for the GET query form.
pub async fn get_variable_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<Vec<HistoricVariableInstance>>> {
    run_list(&state, &params)
}

/// Handler for the POST query form.
pub async fn query_variable_instances<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<Vec<HistoricVariableInstance>>> {
    run_list(&state, &params)
}

/// Handler for the GET count form.
pub async fn get_variable_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryString(params): QueryString,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the POST count form.
pub async fn query_variable_instances_count<E: HistoryService>(
    State(state): State<AppState<E>>,
    QueryDocument(params): QueryDocument,
) -> RestResult<Json<CountResult>> {
    run_count(&state, &params)
}

/// Handler for the singleton lookup.
pub async fn get_variable_instance<E: HistoryService>(
    State(state): State<AppState<E>>,
    Path(id): Path<String>,
    QueryString(params): QueryString,
) -> RestResult<Json<HistoricVariableInstance>> {
    let deserialize_value = params.deserialize_values()?;
    let instance = state
        .engine()
        .historic_variable_instance(&id, deserialize_value)?
        .ok_or_else(|| {
            RestError::not_found(format!(
                "Historic variable instance with id {id} does not exist"
            ))
        })?;
    Ok(Json(instance))
}

fn run_list<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<Vec<HistoricVariableInstance>>> {
    debug!(params = params.len(), "historic variable instance query");
    let mut query = state.engine().create_historic_variable_instance_query();
    let instances = variable_instance::list(params, &mut *query)?;
    Ok(Json(instances))
}

fn run_count<E: HistoryService>(
    state: &AppState<E>,
    params: &ParameterMap,
) -> RestResult<Json<CountResult>> {
    debug!(params = params.len(), "historic variable instance count");
    let mut query = state.engine().create_historic_variable_instance_query();
    let count = variable_instance::count(params, &mut *query)?;
    Ok(Json(CountResult::new(count)))
}
