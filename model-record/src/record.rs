//! The record contract: typed value ↔ document.

use serde_json::Value;

use crate::document::Document;
use crate::error::ModelError;
use crate::extra::AdditionalProperties;

/// A schema-defined object type with a lossless document form.
///
/// Usually implemented with `#[derive(ModelRecord)]`. Implementations must
/// uphold two laws:
///
/// - `from_document(to_document(x)) == x`, extras included
/// - `to_document` writes no key for a field that is [`Field::Unset`](crate::Field)
///
/// Extras are written first and declared fields after, so a declared field
/// always wins over a same-named extra.
///
/// ## Examples
///
/// ```
/// use model_record::{AdditionalProperties, ModelRecord};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, PartialEq, ModelRecord)]
/// pub struct FunctionCall {
///     pub name: String,
///     pub arguments: String,
///     #[model(extra)]
///     pub additional_properties: AdditionalProperties,
/// }
///
/// let call = FunctionCall::from_value(json!({"name": "lookup", "arguments": "{}"})).unwrap();
/// assert_eq!(call.name, "lookup");
/// assert_eq!(call.to_value(), json!({"name": "lookup", "arguments": "{}"}));
/// ```
pub trait ModelRecord: Sized {
    /// Schema name of the record, used in error messages.
    const NAME: &'static str;

    /// Serializes the record. Never fails.
    fn to_document(&self) -> Document;

    /// Parses a record, consuming the working document.
    ///
    /// ## Errors
    ///
    /// [`ModelError::MissingField`], [`ModelError::TypeMismatch`] or
    /// [`ModelError::UnresolvedVariant`] from this record or any nested value.
    fn from_document(document: Document) -> Result<Self, ModelError>;

    fn additional_properties(&self) -> &AdditionalProperties;

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    /// Names of the extra keys, in document order.
    fn additional_keys(&self) -> Vec<String> {
        self.additional_properties().keys().map(str::to_owned).collect()
    }

    fn get_additional(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    fn set_additional(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.additional_properties_mut().insert(key, value)
    }

    fn remove_additional(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }

    fn contains_additional(&self, key: &str) -> bool {
        self.additional_properties().contains_key(key)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_document())
    }

    /// Parses a record from any JSON value.
    ///
    /// ## Errors
    ///
    /// [`ModelError::TypeMismatch`] if `value` is not an object, otherwise as
    /// [`ModelRecord::from_document`].
    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(document) => Self::from_document(document),
            other => Err(ModelError::type_mismatch("object", &other)),
        }
    }

    /// Parses a record from JSON text.
    fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }
}
