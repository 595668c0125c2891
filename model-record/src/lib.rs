//! Typed model records with lossless document round-trips.
//!
//! A *model record* is one schema-defined object type: required fields,
//! optional fields that can be left unset, nested records and unions, and a
//! bag of keys the schema does not know about. This crate provides the
//! contract ([`ModelRecord`]), the pieces it is built from, and derive macros
//! that implement it from a struct definition.
//!
//! ## Core Types
//!
//! - [`ModelRecord`] - typed value ↔ [`Document`] conversion
//! - [`Field`] - tri-state optional field (unset, set, set-to-null)
//! - [`AdditionalProperties`] - unrecognized keys, kept in order
//! - [`WireValue`] - per-value conversion used by every field
//! - [`Variants`] / [`Discriminator`] - tagged-union resolution
//! - [`ModelError`] - missing fields, type mismatches, unresolved unions
//!
//! ## Examples
//!
//! ```
//! use model_record::{AdditionalProperties, Field, ModelRecord};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq, ModelRecord)]
//! pub struct Completion {
//!     pub model: String,
//!     pub temperature: Field<f64>,
//!     #[model(extra)]
//!     pub additional_properties: AdditionalProperties,
//! }
//!
//! let parsed = Completion::from_value(json!({"model": "gpt-4", "seed": 7})).unwrap();
//! assert!(parsed.temperature.is_unset());
//! assert_eq!(parsed["seed"], json!(7));
//!
//! // unset fields are omitted, extras come back
//! assert_eq!(parsed.to_value(), json!({"seed": 7, "model": "gpt-4"}));
//! ```

extern crate self as model_record;

pub mod document;
pub mod error;
pub mod extra;
pub mod field;
pub mod record;
pub mod variant;
pub mod wire;

pub use document::{Document, DocumentReader, DocumentWriter};
pub use error::{FieldPath, ModelError, PathSegment, VariantAttempt, value_kind};
pub use extra::AdditionalProperties;
pub use field::Field;
pub use model_record_macros::{ModelRecord, ModelUnion};
pub use record::ModelRecord;
pub use variant::{Candidate, Discriminator, ParseFn, Variants};
pub use wire::WireValue;

/// Re-exports for macro-generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json::Value;
}
