//! Errors raised while parsing documents into model records.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step on the way from the outermost record to a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A document key.
    Key(String),
    /// A sequence position.
    Index(usize),
}

/// Location of a value inside a document, rendered as `$.messages[1].content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A path one key below the root.
    pub fn key(key: impl Into<String>) -> Self {
        Self(vec![PathSegment::Key(key.into())])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A union alternative that rejected a value, with the reason it gave.
#[derive(Debug)]
pub struct VariantAttempt {
    /// Name of the rejected alternative.
    pub variant: &'static str,
    /// The error its parser returned.
    pub error: ModelError,
}

/// Errors from converting a document into a typed record.
///
/// Parsing is all-or-nothing: any of these aborts construction of the
/// outermost record. Paths are relative to the value handed to the parser.
///
/// ## Examples
///
/// ```
/// use model_record::{FieldPath, ModelError};
///
/// let err = ModelError::MissingField {
///     record: "FunctionCall",
///     path: FieldPath::key("arguments"),
/// };
/// assert_eq!(
///     err.to_string(),
///     "missing required field `$.arguments` in FunctionCall"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ModelError {
    /// A schema-required key is absent from the document.
    #[error("missing required field `{path}` in {record}")]
    MissingField {
        /// Name of the record that declares the field.
        record: &'static str,
        /// Location of the absent key.
        path: FieldPath,
    },

    /// A value is present but cannot be read as the declared type.
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// Location of the offending value.
        path: FieldPath,
        /// The declared shape.
        expected: &'static str,
        /// The JSON kind that was found.
        found: &'static str,
    },

    /// No alternative of a tagged union accepted the value.
    #[error("no variant of {union} accepted the value at `{path}`{}", tag_suffix(.tag))]
    UnresolvedVariant {
        /// Name of the union type.
        union: &'static str,
        /// Location of the value.
        path: FieldPath,
        /// The discriminator value, when the union dispatches on one.
        tag: Option<String>,
        /// Every alternative tried, in declared order.
        attempts: Vec<VariantAttempt>,
    },

    /// JSON text could not be parsed at all.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

fn tag_suffix(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!(" (tag `{tag}`)"),
        None => String::new(),
    }
}

impl ModelError {
    /// Creates a missing-field error for a top-level key of `record`.
    pub fn missing(record: &'static str, key: &str) -> Self {
        Self::MissingField {
            record,
            path: FieldPath::key(key),
        }
    }

    /// Creates a type mismatch for `found` at the current position.
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path: FieldPath::root(),
            expected,
            found: value_kind(found),
        }
    }

    /// Re-roots this error one level deeper, under `segment`.
    ///
    /// Callers walking into a nested value wrap the nested error with the
    /// key or index they walked through.
    pub fn within(mut self, segment: PathSegment) -> Self {
        match &mut self {
            Self::MissingField { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::UnresolvedVariant { path, .. } => path.prepend(segment),
            Self::Json(_) => {}
        }
        self
    }

    /// Shorthand for [`ModelError::within`] with a key segment.
    pub fn within_key(self, key: &str) -> Self {
        self.within(PathSegment::Key(key.to_owned()))
    }

    /// Location of the failure, when the error has one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MissingField { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::UnresolvedVariant { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_unresolved_variant(&self) -> bool {
        matches!(self, Self::UnresolvedVariant { .. })
    }
}

/// The JSON kind of a value, as used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
