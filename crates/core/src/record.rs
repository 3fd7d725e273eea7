//! Record structure for the Tabula engine.
//!
//! A record is a dynamically shaped mapping from column name to `Value`.
//! Records in one table are structurally homogeneous with respect to the
//! table's schema, but the engine itself treats them as untyped containers:
//! a missing field reads as Null.

use crate::value::Value;
use alloc::string::{String, ToString};
use hashbrown::HashMap;

static NULL: Value = Value::Null;

/// A record keyed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Gets a field value, or None if the field is absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Gets a field value, reading an absent field as Null.
    pub fn get_or_null(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns true if the field is present (even if Null).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

impl From<&[(&str, Value)]> for Record {
    fn from(fields: &[(&str, Value)]) -> Self {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_set_get() {
        let mut record = Record::new();
        record.set("Id", Value::Number(1.0));
        record.set("Name", "Alice");

        assert_eq!(record.get("Id"), Some(&Value::Number(1.0)));
        assert_eq!(record.get("Name"), Some(&Value::Text("Alice".into())));
        assert_eq!(record.get("Missing"), None);
    }

    #[test]
    fn test_record_missing_reads_as_null() {
        let record = Record::new();
        assert!(record.get_or_null("anything").is_null());
    }

    #[test]
    fn test_record_overwrite() {
        let mut record = Record::new();
        record.set("Color", "Red");
        record.set("Color", "Blue");
        assert_eq!(record.get("Color"), Some(&Value::Text("Blue".into())));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_equality() {
        let a: Record = [("Id", Value::Number(1.0)), ("Name", Value::Text("A".into()))]
            .into_iter()
            .collect();
        let b: Record = [("Name", Value::Text("A".into())), ("Id", Value::Number(1.0))]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_remove() {
        let mut record: Record = [("Id", Value::Number(1.0))].into_iter().collect();
        assert_eq!(record.remove("Id"), Some(Value::Number(1.0)));
        assert!(record.is_empty());
    }
}
