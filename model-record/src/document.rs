//! The generic document shape and the helpers records use to walk it.
//!
//! [`DocumentReader`] and [`DocumentWriter`] carry the per-field rules of the
//! record contract so that derived implementations stay a flat list of calls:
//!
//! - required keys are removed from the working document or the parse fails
//! - optional keys default to [`Field::Unset`] when absent
//! - whatever is left over becomes the record's [`AdditionalProperties`]
//! - serialization starts from the extras, then writes declared fields over them

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::ModelError;
use crate::extra::AdditionalProperties;
use crate::field::Field;
use crate::wire::WireValue;

/// A string-keyed, insertion-ordered JSON object.
pub type Document = Map<String, Value>;

/// Consumes a working document field by field while parsing a record.
#[derive(Debug)]
pub struct DocumentReader {
    record: &'static str,
    document: Document,
}

impl DocumentReader {
    /// Starts reading `document` on behalf of the record named `record`.
    pub fn new(record: &'static str, document: Document) -> Self {
        Self { record, document }
    }

    /// Removes and converts a required key.
    ///
    /// ## Errors
    ///
    /// [`ModelError::MissingField`] when the key is absent, or the nested
    /// conversion error re-rooted under the key.
    pub fn required<T: WireValue>(&mut self, key: &str) -> Result<T, ModelError> {
        let value = self
            .document
            .shift_remove(key)
            .ok_or_else(|| ModelError::missing(self.record, key))?;
        T::from_wire(value).map_err(|err| err.within_key(key))
    }

    /// Removes and converts an optional key; absence yields [`Field::Unset`].
    pub fn optional<T: WireValue>(&mut self, key: &str) -> Result<Field<T>, ModelError> {
        match self.document.shift_remove(key) {
            Some(value) => T::from_wire(value)
                .map(Field::Set)
                .map_err(|err| err.within_key(key)),
            None => Ok(Field::Unset),
        }
    }

    /// Keys not yet consumed.
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Hands the unconsumed keys over as the record's extras.
    pub fn finish(self) -> AdditionalProperties {
        if !self.document.is_empty() {
            trace!(
                record = self.record,
                keys = ?self.document.keys().collect::<Vec<_>>(),
                "preserving unrecognized fields"
            );
        }
        AdditionalProperties::from(self.document)
    }
}

/// Builds the output document for a record.
#[derive(Debug, Default)]
pub struct DocumentWriter {
    document: Document,
}

impl DocumentWriter {
    /// Starts from a copy of the record's extras so declared fields land on top.
    pub fn new(extra: &AdditionalProperties) -> Self {
        Self {
            document: extra.as_document().clone(),
        }
    }

    pub fn required<T: WireValue>(&mut self, key: &str, value: &T) {
        self.document.insert(key.to_owned(), value.to_wire());
    }

    /// Writes the value only when the field is set.
    pub fn optional<T: WireValue>(&mut self, key: &str, value: &Field<T>) {
        if let Field::Set(value) = value {
            self.document.insert(key.to_owned(), value.to_wire());
        }
    }

    pub fn finish(self) -> Document {
        self.document
    }
}
