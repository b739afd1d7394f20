//! Query builder for historic activity instances.

use chrono::{DateTime, FixedOffset};

use super::HistoryQuery;
use crate::entities::HistoricActivityInstance;
use crate::error::EngineResult;

/// Builder for queries over historic activity instances.
pub trait HistoricActivityInstanceQuery: HistoryQuery<Item = HistoricActivityInstance> {
    fn activity_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_name(&mut self, name: String) -> EngineResult<()>;
    fn activity_type(&mut self, activity_type: String) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn execution_id(&mut self, id: String) -> EngineResult<()>;
    fn task_assignee(&mut self, assignee: String) -> EngineResult<()>;

    fn started_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn started_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn finished_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    fn finished(&mut self) -> EngineResult<()>;
    fn unfinished(&mut self) -> EngineResult<()>;
    fn canceled(&mut self) -> EngineResult<()>;
    /// Restricts to activities that completed their surrounding scope.
    fn complete_scope(&mut self) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn order_by_historic_activity_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_process_instance_id(&mut self) -> EngineResult<()>;
    fn order_by_execution_id(&mut self) -> EngineResult<()>;
    fn order_by_activity_id(&mut self) -> EngineResult<()>;
    fn order_by_activity_name(&mut self) -> EngineResult<()>;
    fn order_by_activity_type(&mut self) -> EngineResult<()>;
    fn order_by_historic_activity_instance_start_time(&mut self) -> EngineResult<()>;
    fn order_by_historic_activity_instance_end_time(&mut self) -> EngineResult<()>;
    fn order_by_historic_activity_instance_duration(&mut self) -> EngineResult<()>;
    fn order_by_process_definition_id(&mut self) -> EngineResult<()>;
    /// Orders by the partial occurrence ordering the engine derives from
    /// start times and instance sequence; weaker than a total order but
    /// stable across scopes.
    fn order_partially_by_occurrence(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
