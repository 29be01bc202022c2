//! Static feature set.

use scriptlens_core::{FeatureSource, FeatureValue};

pub const CODE_LENGTH_KEY: &str = "static_code_length";
pub const NON_ASCII_RATIO_KEY: &str = "static_non_ascii_ratio";

/// Ordered static features. The key set is fixed by the detector tables.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFeatureSet {
    /// Detector results in table order: (key, 0/1 flag or match count).
    pub detections: Vec<(String, u64)>,
    /// Length in UTF-16 code units.
    pub code_length: u64,
    /// Share of UTF-16 code units ≥ 0x80, in [0, 1].
    pub non_ascii_ratio: f64,
}

impl StaticFeatureSet {
    /// Value of a detector key, if the key exists.
    pub fn detection(&self, key: &str) -> Option<u64> {
        self.detections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// All keys in emission order.
    pub fn keys(&self) -> Vec<String> {
        self.feature_entries().into_iter().map(|(k, _)| k).collect()
    }
}

impl FeatureSource for StaticFeatureSet {
    fn feature_entries(&self) -> Vec<(String, FeatureValue)> {
        let mut entries: Vec<(String, FeatureValue)> = self
            .detections
            .iter()
            .map(|(key, value)| (key.clone(), FeatureValue::Count(*value)))
            .collect();
        entries.push((CODE_LENGTH_KEY.to_string(), FeatureValue::Count(self.code_length)));
        entries.push((
            NON_ASCII_RATIO_KEY.to_string(),
            FeatureValue::Ratio(self.non_ascii_ratio),
        ));
        entries
    }
}
