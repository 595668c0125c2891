//! Convenient re-exports of every record, union and enum.
//!
//! ## Examples
//!
//! ```
//! use langwatch_models::prelude::*;
//!
//! let call = FunctionCall::new("lookup", "{}");
//! assert_eq!(call.to_json_string(), r#"{"name":"lookup","arguments":"{}"}"#);
//! ```

// Runtime contract
pub use model_record::{AdditionalProperties, Field, ModelError, ModelRecord, WireValue};

// Prompt versions
pub use crate::prompts::{
    DemonstrationColumn, Demonstrations, InputType, MessageRole, OutputType, PromptConfigData,
    PromptInput, PromptMessage, PromptOutput, PromptVersion, PromptingTechnique,
};

// Scenario events
pub use crate::scenario::{
    AssistantMessage, ChatMessage, FunctionCall, RunResults, RunStartedMetadata, RunStatus,
    ScenarioEvent, ScenarioEventResponse, ScenarioMessageSnapshotEvent, ScenarioRunFinishedEvent,
    ScenarioRunStartedEvent, SystemMessage, ToolCall, ToolMessage, UserMessage, Verdict,
};
