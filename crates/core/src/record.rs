//! Records: the unit of storage in a table
//!
//! A [`Record`] is a mapping of field name to [`Value`]. The changeset
//! machinery stores and moves whole records and never looks inside them;
//! only caller-supplied predicates and mutators inspect fields.

use crate::error::Error;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A structured record: field name to value, sorted by field name.
///
/// Backed by a `BTreeMap` so field iteration order is deterministic.
///
/// # Examples
///
/// ```
/// use ledger_core::record::Record;
/// use ledger_core::value::Value;
///
/// let mut record = Record::new();
/// record.set("name", Value::from("alice"));
/// record.set("age", Value::Int(30));
///
/// assert_eq!(record.get("age"), Some(&Value::Int(30)));
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record(BTreeMap::new())
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a mutable field value
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.0.get_mut(field)
    }

    /// Set a field, returning the previous value if any
    pub fn set(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a field, returning its value if it was present
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Check whether a field is present
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Record(fields)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = Error;

    /// Build a record from a JSON object.
    ///
    /// Fails with [`Error::InvalidRecord`] for any non-object JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::record::Record;
    ///
    /// let record = Record::try_from(serde_json::json!({"n": 5})).unwrap();
    /// assert_eq!(record.get("n").and_then(|v| v.as_int()), Some(5));
    ///
    /// assert!(Record::try_from(serde_json::json!([1, 2])).is_err());
    /// ```
    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Object(o) => Ok(Record(
                o.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
            other => Err(Error::InvalidRecord(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<Record> for serde_json::Value {
    fn from(record: Record) -> Self {
        serde_json::Value::Object(
            record
                .0
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::from(v)))
                .collect(),
        )
    }
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
