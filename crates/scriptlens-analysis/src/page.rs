//! Page-level aggregation of per-script records.
//!
//! The classifier is trained on one vector per page: for every numeric
//! per-script feature, its sum, max and mean over the page's scripts, plus the
//! largest `module` value seen.

use std::sync::LazyLock;

use scriptlens_core::FeatureRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-script features folded into the page vector, in training order.
pub const PAGE_NUMERIC_FEATURES: [&str; 40] = [
    "api_cookie_write",
    "api_doc_write",
    "api_eval",
    "api_localstorage_write",
    "api_new_function",
    "api_set_timeout",
    "calls_total",
    "dom_create_embed",
    "dom_create_iframe",
    "dom_create_script",
    "dom_hidden_elements",
    "errors",
    "events_count",
    "gets_total",
    "net_distinct_hosts",
    "net_fetch_count",
    "net_ip_urls",
    "net_xhr_count",
    "news_total",
    "sets_total",
    "static_code_length",
    "static_count_base64Like",
    "static_count_hexString",
    "static_count_ipAddress",
    "static_count_obfuscatedVar",
    "static_has_adKeywords",
    "static_has_crypto",
    "static_has_documentWrite",
    "static_has_eval",
    "static_has_exploit",
    "static_has_fromCharCode",
    "static_has_hiddenElement",
    "static_has_iframe",
    "static_has_unescape",
    "static_has_websocket",
    "static_non_ascii_ratio",
    "timeout",
    "top_call_1_count",
    "top_call_2_count",
    "top_call_3_count",
];

pub const MODULE_KEY: &str = "module";
pub const MODULE_MAX_KEY: &str = "module_max";

/// Every page-vector key in emission order.
pub static PAGE_FEATURE_ORDER: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut order: Vec<String> = PAGE_NUMERIC_FEATURES
        .iter()
        .flat_map(|name| [format!("{name}_sum"), format!("{name}_max"), format!("{name}_mean")])
        .collect();
    order.push(MODULE_MAX_KEY.to_string());
    order
});

/// Ordered page features. Serializes as a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageVector {
    entries: Vec<(String, f64)>,
}

impl PageVector {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PageVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Folds script records of one page into a [`PageVector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageAggregator;

impl PageAggregator {
    /// Missing or non-numeric values count as 0. No records gives all zeros.
    pub fn aggregate(records: &[FeatureRecord]) -> PageVector {
        let n = records.len() as f64;
        let mut entries = Vec::with_capacity(PAGE_FEATURE_ORDER.len());

        for name in PAGE_NUMERIC_FEATURES {
            let values = records.iter().map(|r| r.get_f64(name).unwrap_or(0.0));
            let (sum, max) = values.fold((0.0_f64, None::<f64>), |(sum, max), v| {
                (sum + v, Some(max.map_or(v, |m| m.max(v))))
            });
            let mean = if records.is_empty() { 0.0 } else { sum / n };
            entries.push((format!("{name}_sum"), sum));
            entries.push((format!("{name}_max"), max.unwrap_or(0.0)));
            entries.push((format!("{name}_mean"), mean));
        }

        let module_max = records
            .iter()
            .map(|r| r.get_f64(MODULE_KEY).unwrap_or(0.0))
            .reduce(f64::max)
            .unwrap_or(0.0);
        entries.push((MODULE_MAX_KEY.to_string(), module_max));

        PageVector { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_has_three_entries_per_feature_plus_module() {
        assert_eq!(PAGE_FEATURE_ORDER.len(), 121);
        assert_eq!(PAGE_FEATURE_ORDER[0], "api_cookie_write_sum");
        assert_eq!(PAGE_FEATURE_ORDER[120], "module_max");
    }

    #[test]
    fn no_records_gives_zeros() {
        let vector = PageAggregator::aggregate(&[]);
        assert_eq!(vector.len(), PAGE_FEATURE_ORDER.len());
        assert!(vector.entries().iter().all(|(_, v)| *v == 0.0));
    }
}
