//! Storage for document keys a record does not declare.

use std::ops::Index;

use serde_json::Value;

use crate::document::Document;

/// Unrecognized document keys carried by a record.
///
/// Filled from leftover keys when a record is parsed and merged back,
/// underneath the declared fields, when it is serialized. Keys keep the order
/// in which they were first inserted.
///
/// Indexing with a missing key panics, like indexing a `HashMap`; use
/// [`AdditionalProperties::get`] to probe.
///
/// ## Examples
///
/// ```
/// use model_record::AdditionalProperties;
/// use serde_json::json;
///
/// let mut extra = AdditionalProperties::new();
/// extra.insert("trace_id", json!("abc"));
/// assert!(extra.contains_key("trace_id"));
/// assert_eq!(extra["trace_id"], json!("abc"));
///
/// extra.remove("trace_id");
/// assert!(extra.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalProperties(Document);

impl AdditionalProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts or replaces a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key without disturbing the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The stored keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

impl From<Document> for AdditionalProperties {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

impl Index<&str> for AdditionalProperties {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("no additional property `{key}`"),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AdditionalProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a AdditionalProperties {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_keep_insertion_order_across_removal() {
        let mut extra: AdditionalProperties =
            [("c", json!(1)), ("a", json!(2)), ("b", json!(3))].into_iter().collect();

        extra.remove("c");

        assert_eq!(extra.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut extra = AdditionalProperties::new();
        extra.insert("x", 1);
        extra.insert("y", 2);
        assert_eq!(extra.insert("x", 3), Some(json!(1)));
        assert_eq!(extra.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(extra["x"], json!(3));
    }

    #[test]
    #[should_panic(expected = "no additional property `missing`")]
    fn index_missing_key_panics() {
        let extra = AdditionalProperties::new();
        let _ = &extra["missing"];
    }
}
