//! Scenario run records.
//!
//! Events are sent as a [`ScenarioEvent`] union keyed on `type`. Message
//! snapshots embed the conversation as [`ChatMessage`] values.

mod events;
mod messages;

pub use events::{
    MessageSnapshotType, RunFinishedType, RunResults, RunStartedMetadata, RunStartedType,
    RunStatus, ScenarioEvent, ScenarioEventResponse, ScenarioMessageSnapshotEvent,
    ScenarioRunFinishedEvent, ScenarioRunStartedEvent, Verdict,
};
pub use messages::{
    AssistantMessage, AssistantRole, ChatMessage, FunctionCall, FunctionType, SystemMessage,
    SystemRole, ToolCall, ToolMessage, ToolRole, UserMessage, UserRole,
};
