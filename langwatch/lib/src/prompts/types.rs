//! Prompt version records.
//!
//! Shapes returned by `GET /api/prompts/{id}/versions`. Schema names in
//! `#[model(name = ...)]` follow the API's response naming so errors point at
//! the schema a reader will find in the API reference.

use model_record::{AdditionalProperties, Field, ModelRecord, wire_str_enum};
use serde_json::Value;
use strum::{AsRefStr, EnumIter, EnumString};

/// One stored version of a prompt.
#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200")]
pub struct PromptVersion {
    pub id: String,
    /// `null` when the version was created by an API key rather than a user.
    pub author_id: Option<String>,
    pub project_id: String,
    pub config_id: String,
    pub schema_version: String,
    pub commit_message: String,
    pub version: f64,
    pub created_at: String,
    pub config_data: PromptConfigData,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

/// The prompt configuration captured by a version.
///
/// ## Examples
///
/// ```
/// use langwatch_models::prompts::PromptConfigData;
/// use model_record::ModelRecord;
/// use serde_json::json;
///
/// let config = PromptConfigData::from_value(json!({
///     "prompt": "p",
///     "messages": [],
///     "inputs": [],
///     "outputs": [],
///     "model": "gpt-4",
///     "demonstrations": {},
///     "extra_flag": true
/// }))
/// .unwrap();
///
/// assert_eq!(config["extra_flag"], json!(true));
/// assert!(config.temperature.is_unset());
/// ```
#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigData")]
pub struct PromptConfigData {
    pub prompt: String,
    pub messages: Vec<PromptMessage>,
    pub inputs: Vec<PromptInput>,
    pub outputs: Vec<PromptOutput>,
    pub model: String,
    pub demonstrations: Demonstrations,
    pub version: Field<f64>,
    pub temperature: Field<f64>,
    pub max_tokens: Field<f64>,
    pub prompting_technique: Field<PromptingTechnique>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl PromptConfigData {
    /// A configuration with empty collections and every optional field unset.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            messages: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            model: model.into(),
            demonstrations: Demonstrations::default(),
            version: Field::Unset,
            temperature: Field::Unset,
            max_tokens: Field::Unset,
            prompting_technique: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataMessagesItem")]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

impl PromptMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Type of a prompt input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum InputType {
    #[strum(serialize = "str")]
    Str,
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "image")]
    Image,
    #[strum(serialize = "list[str]")]
    ListStr,
    #[strum(serialize = "list[float]")]
    ListFloat,
    #[strum(serialize = "list[int]")]
    ListInt,
    #[strum(serialize = "list[bool]")]
    ListBool,
    #[strum(serialize = "dict")]
    Dict,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataInputsItem")]
pub struct PromptInput {
    pub identifier: String,
    #[model(rename = "type")]
    pub input_type: InputType,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

/// Type of a prompt output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum OutputType {
    Str,
    Float,
    Bool,
    JsonSchema,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataOutputsItem")]
pub struct PromptOutput {
    pub identifier: String,
    #[model(rename = "type")]
    pub output_type: OutputType,
    /// Only meaningful for [`OutputType::JsonSchema`]; kept as a raw document.
    pub json_schema: Field<Value>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

/// Few-shot examples attached to a prompt.
#[derive(Debug, Clone, Default, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataDemonstrations")]
pub struct Demonstrations {
    pub columns: Field<Vec<DemonstrationColumn>>,
    /// Rows are free-form; their keys are the column ids.
    pub rows: Field<Vec<Value>>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataDemonstrationsColumnsItem")]
pub struct DemonstrationColumn {
    pub id: String,
    pub name: String,
    #[model(rename = "type")]
    pub column_type: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, ModelRecord)]
#[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataPromptingTechnique")]
pub struct PromptingTechnique {
    #[model(rename = "ref")]
    pub reference: Field<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

wire_str_enum!(MessageRole, InputType, OutputType);
