//! Derive macros for model-record document round-trips.
//!
//! This crate provides two derives, re-exported by `model_record`:
//!
//! - [`ModelRecord`] - the typed ↔ document contract for a struct
//! - [`ModelUnion`] - resolution of a tagged union of alternative types
//!
//! Generated code refers to the runtime through `::model_record`, so depend on
//! that crate rather than on this one directly.
//!
//! ## Examples
//!
//! ```ignore
//! use model_record::{AdditionalProperties, Field, ModelRecord, ModelUnion};
//!
//! #[derive(ModelRecord)]
//! pub struct ToolMessage {
//!     pub role: ToolRole,
//!     pub content: String,
//!     pub tool_call_id: String,
//!     #[model(extra)]
//!     pub additional_properties: AdditionalProperties,
//! }
//!
//! #[derive(ModelUnion)]
//! pub enum ChatMessage {
//!     User(UserMessage),
//!     Tool(ToolMessage),
//! }
//! ```

use proc_macro::TokenStream;

mod codegen;
mod derive_record;
mod derive_union;
mod parse;

/// Derive macro for model records.
///
/// Applies to structs with named fields. Fields typed `Field<T>` are optional
/// (omitted from output while unset); every other field is required.
///
/// ## Attributes
///
/// On the struct:
/// - `#[model(name = "...")]` - Schema name used in errors (optional)
///
/// On fields:
/// - `#[model(extra)]` - The `AdditionalProperties` map (exactly one, required)
/// - `#[model(rename = "...")]` - Document key, when it differs from the field name
/// - `#[model(optional)]` / `#[model(required)]` - Override `Field<_>` detection
///
/// ## Generated Items
///
/// - `impl ModelRecord` (required fields first, then optional, each in declaration order)
/// - `impl WireValue`, so the record nests inside other records, `Vec`s and unions
/// - `impl Index<&str>` reading the extras
/// - `impl Serialize` / `impl Deserialize` through the document form
///
/// ## Examples
///
/// ```ignore
/// #[derive(ModelRecord)]
/// #[model(name = "GetApiPromptsByIdVersionsResponse200ConfigDataInputsItem")]
/// pub struct PromptInput {
///     pub identifier: String,
///     #[model(rename = "type")]
///     pub input_type: InputType,
///     #[model(extra)]
///     pub additional_properties: AdditionalProperties,
/// }
/// ```
#[proc_macro_derive(ModelRecord, attributes(model))]
pub fn derive_model_record(input: TokenStream) -> TokenStream {
    derive_record::derive_model_record_impl(input.into()).into()
}

/// Derive macro for tagged unions of alternative types.
///
/// Applies to enums whose variants each wrap one type implementing `WireValue`.
///
/// ## Attributes
///
/// On the enum:
/// - `#[model(name = "...")]` - Schema name used in errors (optional)
/// - `#[model(discriminator = "...")]` - Dispatch on this tag key instead of
///   trying variants in order (optional)
///
/// On variants:
/// - `#[model(tag = "...")]` - Tag value selecting the variant (required with
///   a discriminator, rejected without one)
///
/// ## Generated Items
///
/// - `impl WireValue` (first-success trial, or tag dispatch)
/// - `fn variant_name(&self) -> &'static str`
/// - `impl From<Alternative>` for alternatives used by a single variant
/// - `impl Serialize` / `impl Deserialize`
///
/// ## Examples
///
/// ```ignore
/// #[derive(ModelUnion)]
/// #[model(discriminator = "type")]
/// pub enum ScenarioEvent {
///     #[model(tag = "SCENARIO_RUN_STARTED")]
///     RunStarted(ScenarioRunStartedEvent),
///     #[model(tag = "SCENARIO_RUN_FINISHED")]
///     RunFinished(ScenarioRunFinishedEvent),
/// }
/// ```
#[proc_macro_derive(ModelUnion, attributes(model))]
pub fn derive_model_union(input: TokenStream) -> TokenStream {
    derive_union::derive_model_union_impl(input.into()).into()
}
