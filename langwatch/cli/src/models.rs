//! The record and union types `lwm check` accepts, and the check itself.

use langwatch_models::prelude::*;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::error::CliError;

/// A model selectable on the command line, named in kebab case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ModelKind {
    PromptVersion,
    PromptConfigData,
    PromptMessage,
    PromptInput,
    PromptOutput,
    Demonstrations,
    DemonstrationColumn,
    PromptingTechnique,
    ScenarioEvent,
    ScenarioRunStartedEvent,
    RunStartedMetadata,
    ScenarioRunFinishedEvent,
    RunResults,
    ScenarioMessageSnapshotEvent,
    ScenarioEventResponse,
    ChatMessage,
    SystemMessage,
    UserMessage,
    AssistantMessage,
    ToolMessage,
    ToolCall,
    FunctionCall,
}

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// The document as the model serializes it.
    pub document: Value,
    /// Keys the model does not declare, in document order. Empty for unions.
    pub extra_keys: Vec<String>,
    /// The alternative a union resolved to.
    pub variant: Option<&'static str>,
}

impl ModelKind {
    /// Looks up a model by its command-line name.
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        name.parse::<Self>()
            .map_err(|_| CliError::UnknownModel(name.to_string()))
    }

    /// Schema name the model reports in errors.
    pub fn schema_name(&self) -> &'static str {
        match self {
            ModelKind::PromptVersion => PromptVersion::NAME,
            ModelKind::PromptConfigData => PromptConfigData::NAME,
            ModelKind::PromptMessage => PromptMessage::NAME,
            ModelKind::PromptInput => PromptInput::NAME,
            ModelKind::PromptOutput => PromptOutput::NAME,
            ModelKind::Demonstrations => Demonstrations::NAME,
            ModelKind::DemonstrationColumn => DemonstrationColumn::NAME,
            ModelKind::PromptingTechnique => PromptingTechnique::NAME,
            ModelKind::ScenarioEvent => "ScenarioEvent",
            ModelKind::ScenarioRunStartedEvent => ScenarioRunStartedEvent::NAME,
            ModelKind::RunStartedMetadata => RunStartedMetadata::NAME,
            ModelKind::ScenarioRunFinishedEvent => ScenarioRunFinishedEvent::NAME,
            ModelKind::RunResults => RunResults::NAME,
            ModelKind::ScenarioMessageSnapshotEvent => ScenarioMessageSnapshotEvent::NAME,
            ModelKind::ScenarioEventResponse => ScenarioEventResponse::NAME,
            ModelKind::ChatMessage => "ChatMessage",
            ModelKind::SystemMessage => SystemMessage::NAME,
            ModelKind::UserMessage => UserMessage::NAME,
            ModelKind::AssistantMessage => AssistantMessage::NAME,
            ModelKind::ToolMessage => ToolMessage::NAME,
            ModelKind::ToolCall => ToolCall::NAME,
            ModelKind::FunctionCall => FunctionCall::NAME,
        }
    }

    /// Parses `value` as this model, serializes it again and confirms the
    /// serialized form parses back to the same value.
    pub fn check(&self, value: Value) -> Result<CheckReport, CliError> {
        debug!(model = %self, "checking document");
        match self {
            ModelKind::PromptVersion => check_record::<PromptVersion>(value),
            ModelKind::PromptConfigData => check_record::<PromptConfigData>(value),
            ModelKind::PromptMessage => check_record::<PromptMessage>(value),
            ModelKind::PromptInput => check_record::<PromptInput>(value),
            ModelKind::PromptOutput => check_record::<PromptOutput>(value),
            ModelKind::Demonstrations => check_record::<Demonstrations>(value),
            ModelKind::DemonstrationColumn => check_record::<DemonstrationColumn>(value),
            ModelKind::PromptingTechnique => check_record::<PromptingTechnique>(value),
            ModelKind::ScenarioEvent => {
                check_union(self.schema_name(), value, ScenarioEvent::variant_name)
            }
            ModelKind::ScenarioRunStartedEvent => check_record::<ScenarioRunStartedEvent>(value),
            ModelKind::RunStartedMetadata => check_record::<RunStartedMetadata>(value),
            ModelKind::ScenarioRunFinishedEvent => check_record::<ScenarioRunFinishedEvent>(value),
            ModelKind::RunResults => check_record::<RunResults>(value),
            ModelKind::ScenarioMessageSnapshotEvent => {
                check_record::<ScenarioMessageSnapshotEvent>(value)
            }
            ModelKind::ScenarioEventResponse => check_record::<ScenarioEventResponse>(value),
            ModelKind::ChatMessage => {
                check_union(self.schema_name(), value, ChatMessage::variant_name)
            }
            ModelKind::SystemMessage => check_record::<SystemMessage>(value),
            ModelKind::UserMessage => check_record::<UserMessage>(value),
            ModelKind::AssistantMessage => check_record::<AssistantMessage>(value),
            ModelKind::ToolMessage => check_record::<ToolMessage>(value),
            ModelKind::ToolCall => check_record::<ToolCall>(value),
            ModelKind::FunctionCall => check_record::<FunctionCall>(value),
        }
    }
}

fn check_record<T: ModelRecord + PartialEq>(value: Value) -> Result<CheckReport, CliError> {
    let record = T::from_value(value).map_err(|source| CliError::Model {
        model: T::NAME,
        source,
    })?;
    let document = record.to_value();

    let reparsed = T::from_value(document.clone()).map_err(|source| CliError::Model {
        model: T::NAME,
        source,
    })?;
    if reparsed != record {
        return Err(CliError::RoundTrip(T::NAME));
    }

    Ok(CheckReport {
        document,
        extra_keys: record.additional_keys(),
        variant: None,
    })
}

fn check_union<T: WireValue + PartialEq>(
    name: &'static str,
    value: Value,
    variant_name: fn(&T) -> &'static str,
) -> Result<CheckReport, CliError> {
    let union = T::from_wire(value).map_err(|source| CliError::Model {
        model: name,
        source,
    })?;
    let document = union.to_wire();

    let reparsed = T::from_wire(document.clone()).map_err(|source| CliError::Model {
        model: name,
        source,
    })?;
    if reparsed != union {
        return Err(CliError::RoundTrip(name));
    }

    Ok(CheckReport {
        document,
        extra_keys: Vec::new(),
        variant: Some(variant_name(&union)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip_through_from_name() {
        for kind in ModelKind::iter() {
            assert_eq!(ModelKind::from_name(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = ModelKind::from_name("prompt").unwrap_err();
        assert!(matches!(err, CliError::UnknownModel(name) if name == "prompt"));
    }

    #[test]
    fn record_check_reports_extra_keys() {
        let report = ModelKind::FunctionCall
            .check(json!({"name": "lookup", "arguments": "{}", "index": 0}))
            .unwrap();
        assert_eq!(report.extra_keys, vec!["index"]);
        assert_eq!(report.variant, None);
    }

    #[test]
    fn union_check_reports_variant() {
        let report = ModelKind::ChatMessage
            .check(json!({"role": "tool", "content": "ok", "tool_call_id": "c1"}))
            .unwrap();
        assert_eq!(report.variant, Some("Tool"));
    }

    #[test]
    fn model_errors_name_the_schema() {
        let err = ModelKind::PromptInput
            .check(json!({"identifier": "q"}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "GetApiPromptsByIdVersionsResponse200ConfigDataInputsItem: missing required field `$.type` in GetApiPromptsByIdVersionsResponse200ConfigDataInputsItem"
        );
    }
}
