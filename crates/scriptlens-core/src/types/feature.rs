//! Scalar and list feature values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single feature value as emitted in the record.
///
/// Flags are emitted as `Count` 0/1 so the classifier sees plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Count(u64),
    Ratio(f64),
    Text(String),
    TextList(Vec<String>),
}

impl From<FeatureValue> for Value {
    fn from(value: FeatureValue) -> Self {
        match value {
            FeatureValue::Count(n) => Value::from(n),
            FeatureValue::Ratio(r) => Value::from(r),
            FeatureValue::Text(s) => Value::String(s),
            FeatureValue::TextList(list) => {
                Value::Array(list.into_iter().map(Value::String).collect())
            }
        }
    }
}

/// Anything that contributes a fixed, ordered set of named features.
pub trait FeatureSource {
    /// Named features in emission order.
    fn feature_entries(&self) -> Vec<(String, FeatureValue)>;
}
