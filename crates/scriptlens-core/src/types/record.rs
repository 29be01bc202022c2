//! The flat feature record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::feature::FeatureSource;

/// Flat, insertion-ordered mapping from feature name to JSON scalar or array.
///
/// Inserting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRecord(Map<String, Value>);

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overriding any earlier value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge every entry of `source`, later values winning.
    pub fn merge_source(&mut self, source: &dyn FeatureSource) {
        for (key, value) in source.feature_entries() {
            self.insert(key, value);
        }
    }

    /// Merge raw key/value pairs, later values winning.
    pub fn merge_map(&mut self, entries: &Map<String, Value>) {
        for (key, value) in entries {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric view of a feature. Numeric strings are parsed; booleans map to 0/1.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as one line of JSON (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}
