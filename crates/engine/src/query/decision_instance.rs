//! Query builder for historic decision instances.

use chrono::{DateTime, FixedOffset};

use super::HistoryQuery;
use crate::entities::HistoricDecisionInstance;
use crate::error::EngineResult;

/// Builder for queries over historic decision instances.
pub trait HistoricDecisionInstanceQuery: HistoryQuery<Item = HistoricDecisionInstance> {
    fn decision_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn decision_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn decision_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn decision_definition_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn decision_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn decision_definition_key_in(&mut self, keys: Vec<String>) -> EngineResult<()>;
    fn decision_definition_name(&mut self, name: String) -> EngineResult<()>;
    fn decision_definition_name_like(&mut self, name: String) -> EngineResult<()>;
    fn process_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn process_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn process_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn case_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn case_definition_key(&mut self, key: String) -> EngineResult<()>;
    fn case_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn activity_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn activity_instance_id_in(&mut self, ids: Vec<String>) -> EngineResult<()>;
    fn user_id(&mut self, user_id: String) -> EngineResult<()>;
    fn root_decision_instance_id(&mut self, id: String) -> EngineResult<()>;
    fn decision_requirements_definition_id(&mut self, id: String) -> EngineResult<()>;
    fn decision_requirements_definition_key(&mut self, key: String) -> EngineResult<()>;

    fn evaluated_before(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;
    fn evaluated_after(&mut self, date: DateTime<FixedOffset>) -> EngineResult<()>;

    /// Restricts to evaluations that were not required by another decision.
    fn root_decision_instances_only(&mut self) -> EngineResult<()>;
    /// Fetches the decision inputs along with each instance.
    fn include_inputs(&mut self) -> EngineResult<()>;
    /// Fetches the decision outputs along with each instance.
    fn include_outputs(&mut self) -> EngineResult<()>;
    /// Skips fetching byte-array input/output values.
    fn disable_binary_fetching(&mut self) -> EngineResult<()>;
    /// Returns serialized object values instead of deserializing them.
    fn disable_custom_object_deserialization(&mut self) -> EngineResult<()>;

    fn tenant_id_in(&mut self, tenant_ids: Vec<String>) -> EngineResult<()>;
    fn without_tenant_id(&mut self) -> EngineResult<()>;

    fn order_by_evaluation_time(&mut self) -> EngineResult<()>;
    fn order_by_tenant_id(&mut self) -> EngineResult<()>;
}
