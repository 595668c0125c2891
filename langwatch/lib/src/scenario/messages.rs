//! Chat messages carried by message snapshot events.
//!
//! [`ChatMessage`] is resolved by trying each role in turn. Every alternative
//! pins its `role` with a literal type, so exactly one alternative can accept
//! a well-formed message.

use model_record::{AdditionalProperties, Field, ModelRecord, ModelUnion, wire_literal};

wire_literal! {
    pub struct SystemRole = "system";
}

wire_literal! {
    pub struct UserRole = "user";
}

wire_literal! {
    pub struct AssistantRole = "assistant";
}

wire_literal! {
    pub struct ToolRole = "tool";
}

wire_literal! {
    /// The only tool call type the API defines.
    pub struct FunctionType = "function";
}

#[derive(Debug, Clone, PartialEq, ModelUnion)]
pub enum ChatMessage {
    System(SystemMessage),
    User(UserMessage),
    Assistant(AssistantMessage),
    Tool(ToolMessage),
}

impl ChatMessage {
    /// The wire `role` of the held message.
    pub fn role(&self) -> &'static str {
        match self {
            ChatMessage::System(_) => SystemRole::VALUE,
            ChatMessage::User(_) => UserRole::VALUE,
            ChatMessage::Assistant(_) => AssistantRole::VALUE,
            ChatMessage::Tool(_) => ToolRole::VALUE,
        }
    }

    /// Text content, when the message has any.
    pub fn content(&self) -> Option<&str> {
        match self {
            ChatMessage::System(m) => Some(&m.content),
            ChatMessage::User(m) => Some(&m.content),
            ChatMessage::Assistant(m) => m.content.as_option().and_then(|c| c.as_deref()),
            ChatMessage::Tool(m) => Some(&m.content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct SystemMessage {
    pub role: SystemRole,
    pub content: String,
    pub name: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl SystemMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: SystemRole,
            content: content.into(),
            name: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct UserMessage {
    pub role: UserRole,
    pub content: String,
    pub name: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl UserMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: UserRole,
            content: content.into(),
            name: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// An assistant turn. `content` is `null` when the turn only calls tools.
#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct AssistantMessage {
    pub role: AssistantRole,
    pub content: Field<Option<String>>,
    pub tool_calls: Field<Vec<ToolCall>>,
    pub name: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl AssistantMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: AssistantRole,
            content: Field::Set(Some(content.into())),
            tool_calls: Field::Unset,
            name: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// A turn that only calls tools, with explicit `null` content.
    pub fn with_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: AssistantRole,
            content: Field::Set(None),
            tool_calls: Field::Set(tool_calls),
            name: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ToolMessage {
    pub role: ToolRole,
    pub content: String,
    pub tool_call_id: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl ToolMessage {
    pub fn new(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ToolRole,
            content: content.into(),
            tool_call_id: tool_call_id.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ToolCall {
    pub id: String,
    #[model(rename = "type")]
    pub call_type: FunctionType,
    pub function: FunctionCall,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, function: FunctionCall) -> Self {
        Self {
            id: id.into(),
            call_type: FunctionType,
            function,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// The function a tool call invokes.
///
/// `arguments` is the JSON-encoded argument object, kept as text.
///
/// ```
/// use langwatch_models::scenario::FunctionCall;
/// use model_record::ModelRecord;
/// use serde_json::json;
///
/// let document = json!({"name": "lookup", "arguments": "{}"});
/// let call = FunctionCall::from_value(document.clone()).unwrap();
/// assert_eq!(call.to_value(), document);
/// ```
#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "PostApiScenarioEventsBodyType2MessagesItemType2ToolCallsItemFunction")]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}
