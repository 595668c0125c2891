//! Resolution of tagged-union fields.
//!
//! A union field can hold one of several alternative shapes. Two strategies
//! are supported:
//!
//! - [`Variants`] tries each alternative's parser in declared order and keeps
//!   the first success
//! - [`Discriminator`] reads a tag key and hands the value to the matching
//!   alternative only
//!
//! Either way every candidate returns a `Result`, and the rejections are kept
//! on the final [`ModelError::UnresolvedVariant`] so callers can see why each
//! alternative declined.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{FieldPath, ModelError, VariantAttempt};

/// Parser for one union alternative.
pub type ParseFn<T> = fn(Value) -> Result<T, ModelError>;

/// A named union alternative.
///
/// For [`Discriminator`] dispatch the name is the tag value that selects it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<T> {
    pub name: &'static str,
    pub parse: ParseFn<T>,
}

impl<T> Candidate<T> {
    pub fn new(name: &'static str, parse: ParseFn<T>) -> Self {
        Self { name, parse }
    }
}

/// Ordered trial over a union's alternatives; the first to parse wins.
///
/// ## Examples
///
/// ```
/// use model_record::{Candidate, ModelError, Variants, WireValue};
/// use serde_json::{json, Value};
///
/// #[derive(Debug, PartialEq)]
/// enum Content {
///     Text(String),
///     Parts(Vec<String>),
/// }
///
/// let candidates = [
///     Candidate::new("Text", |v: Value| String::from_wire(v).map(Content::Text)),
///     Candidate::new("Parts", |v: Value| Vec::<String>::from_wire(v).map(Content::Parts)),
/// ];
/// let variants = Variants::new("Content", &candidates);
///
/// assert_eq!(variants.resolve(json!("hi")).unwrap(), Content::Text("hi".into()));
/// assert_eq!(
///     variants.resolve(json!(["a"])).unwrap(),
///     Content::Parts(vec!["a".into()])
/// );
/// assert!(variants.resolve(json!(3)).unwrap_err().is_unresolved_variant());
/// ```
#[derive(Debug)]
pub struct Variants<'a, T> {
    union: &'static str,
    candidates: &'a [Candidate<T>],
}

impl<'a, T> Variants<'a, T> {
    pub fn new(union: &'static str, candidates: &'a [Candidate<T>]) -> Self {
        Self { union, candidates }
    }

    /// Tries each candidate in order on its own copy of `value`.
    ///
    /// ## Errors
    ///
    /// [`ModelError::UnresolvedVariant`] listing every rejection when no
    /// candidate accepts the value.
    pub fn resolve(&self, value: Value) -> Result<T, ModelError> {
        let mut attempts = Vec::with_capacity(self.candidates.len());

        for candidate in self.candidates {
            match (candidate.parse)(value.clone()) {
                Ok(parsed) => {
                    trace!(union = self.union, variant = candidate.name, "variant accepted");
                    return Ok(parsed);
                }
                Err(error) => {
                    trace!(
                        union = self.union,
                        variant = candidate.name,
                        %error,
                        "variant rejected"
                    );
                    attempts.push(VariantAttempt {
                        variant: candidate.name,
                        error,
                    });
                }
            }
        }

        debug!(
            union = self.union,
            attempts = attempts.len(),
            "no variant accepted the value"
        );
        Err(ModelError::UnresolvedVariant {
            union: self.union,
            path: FieldPath::root(),
            tag: None,
            attempts,
        })
    }
}

/// Dispatch on the string value of a tag key.
///
/// The tag key stays in the document handed to the chosen alternative, which
/// normally declares it as a literal field.
#[derive(Debug)]
pub struct Discriminator<'a, T> {
    union: &'static str,
    key: &'static str,
    arms: &'a [Candidate<T>],
}

impl<'a, T> Discriminator<'a, T> {
    pub fn new(union: &'static str, key: &'static str, arms: &'a [Candidate<T>]) -> Self {
        Self { union, key, arms }
    }

    /// Parses `value` with the arm named by its tag.
    ///
    /// ## Errors
    ///
    /// - [`ModelError::TypeMismatch`] when `value` is not an object or the tag
    ///   is not a string
    /// - [`ModelError::MissingField`] when the tag key is absent
    /// - [`ModelError::UnresolvedVariant`] when no arm has that tag, or when the
    ///   selected arm rejects the value
    pub fn resolve(&self, value: Value) -> Result<T, ModelError> {
        let tag = match &value {
            Value::Object(map) => match map.get(self.key) {
                Some(Value::String(tag)) => tag.clone(),
                Some(other) => {
                    return Err(ModelError::type_mismatch("string", other).within_key(self.key));
                }
                None => return Err(ModelError::missing(self.union, self.key)),
            },
            other => return Err(ModelError::type_mismatch("object", other)),
        };

        let Some(arm) = self.arms.iter().find(|arm| arm.name == tag) else {
            debug!(union = self.union, %tag, "unknown discriminator");
            return Err(ModelError::UnresolvedVariant {
                union: self.union,
                path: FieldPath::root(),
                tag: Some(tag),
                attempts: Vec::new(),
            });
        };

        (arm.parse)(value).map_err(|error| {
            debug!(union = self.union, %tag, %error, "tagged variant rejected");
            ModelError::UnresolvedVariant {
                union: self.union,
                path: FieldPath::root(),
                tag: Some(tag.clone()),
                attempts: vec![VariantAttempt {
                    variant: arm.name,
                    error,
                }],
            }
        })
    }
}
