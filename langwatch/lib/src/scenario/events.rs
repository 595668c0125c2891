//! Scenario run events posted to `/api/scenario-events`.

use model_record::{AdditionalProperties, Field, ModelRecord, ModelUnion, wire_literal, wire_str_enum};
use serde_json::Value;
use strum::{AsRefStr, EnumIter, EnumString};

use super::messages::ChatMessage;

wire_literal! {
    pub struct RunStartedType = "SCENARIO_RUN_STARTED";
}

wire_literal! {
    pub struct RunFinishedType = "SCENARIO_RUN_FINISHED";
}

wire_literal! {
    pub struct MessageSnapshotType = "SCENARIO_MESSAGE_SNAPSHOT";
}

/// Any event accepted by the scenario events endpoint, selected by `type`.
///
/// ## Examples
///
/// ```
/// use langwatch_models::scenario::ScenarioEvent;
/// use model_record::WireValue;
/// use serde_json::json;
///
/// let event = ScenarioEvent::from_wire(json!({
///     "type": "SCENARIO_RUN_STARTED",
///     "timestamp": 1718000000000u64,
///     "batch_run_id": "batch_1",
///     "scenario_id": "checkout",
///     "scenario_run_id": "run_1",
///     "metadata": {"name": "Checkout flow"}
/// }))
/// .unwrap();
///
/// assert_eq!(event.variant_name(), "SCENARIO_RUN_STARTED");
/// assert_eq!(event.scenario_run_id(), "run_1");
/// ```
#[derive(Debug, Clone, PartialEq, ModelUnion)]
#[model(discriminator = "type")]
pub enum ScenarioEvent {
    #[model(tag = "SCENARIO_RUN_STARTED")]
    RunStarted(ScenarioRunStartedEvent),
    #[model(tag = "SCENARIO_RUN_FINISHED")]
    RunFinished(ScenarioRunFinishedEvent),
    #[model(tag = "SCENARIO_MESSAGE_SNAPSHOT")]
    MessageSnapshot(ScenarioMessageSnapshotEvent),
}

impl ScenarioEvent {
    pub fn batch_run_id(&self) -> &str {
        match self {
            ScenarioEvent::RunStarted(e) => &e.batch_run_id,
            ScenarioEvent::RunFinished(e) => &e.batch_run_id,
            ScenarioEvent::MessageSnapshot(e) => &e.batch_run_id,
        }
    }

    pub fn scenario_run_id(&self) -> &str {
        match self {
            ScenarioEvent::RunStarted(e) => &e.scenario_run_id,
            ScenarioEvent::RunFinished(e) => &e.scenario_run_id,
            ScenarioEvent::MessageSnapshot(e) => &e.scenario_run_id,
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> f64 {
        match self {
            ScenarioEvent::RunStarted(e) => e.timestamp,
            ScenarioEvent::RunFinished(e) => e.timestamp,
            ScenarioEvent::MessageSnapshot(e) => e.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ScenarioRunStartedEvent {
    #[model(rename = "type")]
    pub event_type: RunStartedType,
    pub timestamp: f64,
    pub batch_run_id: String,
    pub scenario_id: String,
    pub scenario_run_id: String,
    pub metadata: RunStartedMetadata,
    pub raw_event: Field<Value>,
    pub scenario_set_id: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, ModelRecord)]
pub struct RunStartedMetadata {
    pub name: Field<String>,
    pub description: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ScenarioRunFinishedEvent {
    #[model(rename = "type")]
    pub event_type: RunFinishedType,
    pub timestamp: f64,
    pub batch_run_id: String,
    pub scenario_id: String,
    pub scenario_run_id: String,
    pub status: RunStatus,
    pub raw_event: Field<Value>,
    pub scenario_set_id: Field<String>,
    pub results: Field<Option<RunResults>>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Success,
    Error,
    Cancelled,
    InProgress,
    Pending,
    Failed,
}

/// Judge outcome of a finished run.
#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct RunResults {
    pub verdict: Verdict,
    pub met_criteria: Vec<String>,
    pub unmet_criteria: Vec<String>,
    pub reasoning: Field<String>,
    pub error: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    Success,
    Failure,
    Inconclusive,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ScenarioMessageSnapshotEvent {
    #[model(rename = "type")]
    pub event_type: MessageSnapshotType,
    pub timestamp: f64,
    pub batch_run_id: String,
    pub scenario_id: String,
    pub scenario_run_id: String,
    pub messages: Vec<ChatMessage>,
    pub raw_event: Field<Value>,
    pub scenario_set_id: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

/// Body returned after posting an event.
#[derive(Debug, Clone, Default, PartialEq, ModelRecord)]
pub struct ScenarioEventResponse {
    pub success: Field<bool>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

wire_str_enum!(RunStatus, Verdict);
