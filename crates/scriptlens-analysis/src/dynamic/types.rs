//! Dynamic feature set.

use scriptlens_core::{FeatureSource, FeatureValue};

/// Counters and derived values from one pass over a trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicFeatureSet {
    pub events_count: u64,
    pub calls_total: u64,
    pub gets_total: u64,
    pub sets_total: u64,
    pub news_total: u64,
    /// Engine output entries that could not be decoded.
    pub errors: u64,
    pub timeout: bool,

    pub api_eval: u64,
    pub api_new_function: u64,
    pub api_doc_write: u64,
    pub api_set_timeout: u64,
    pub api_localstorage_write: u64,
    pub api_cookie_write: u64,

    pub dom_create_iframe: u64,
    pub dom_create_script: u64,
    pub dom_create_embed: u64,
    pub dom_hidden_elements: u64,

    pub net_fetch_count: u64,
    pub net_xhr_count: u64,
    pub net_distinct_hosts: u64,
    pub net_ip_urls: u64,

    /// Code strings handed to eval or written inside script tags, in trace order.
    pub dynamic_code_snippets: Vec<String>,
    /// Up to three most-called paths with their counts.
    pub top_calls: Vec<(String, u64)>,
}

impl DynamicFeatureSet {
    /// Keys emitted for every trace, in emission order. The `top_call_k`
    /// pairs follow these and depend on the trace.
    pub const FIXED_KEYS: [&'static str; 22] = [
        "events_count",
        "calls_total",
        "gets_total",
        "sets_total",
        "news_total",
        "errors",
        "timeout",
        "api_eval",
        "api_new_function",
        "api_doc_write",
        "api_set_timeout",
        "api_localstorage_write",
        "api_cookie_write",
        "dom_create_iframe",
        "dom_create_script",
        "dom_create_embed",
        "dom_hidden_elements",
        "net_fetch_count",
        "net_xhr_count",
        "net_distinct_hosts",
        "net_ip_urls",
        "dynamic_code_snippets",
    ];
}

impl FeatureSource for DynamicFeatureSet {
    fn feature_entries(&self) -> Vec<(String, FeatureValue)> {
        let counts = [
            self.events_count,
            self.calls_total,
            self.gets_total,
            self.sets_total,
            self.news_total,
            self.errors,
            u64::from(self.timeout),
            self.api_eval,
            self.api_new_function,
            self.api_doc_write,
            self.api_set_timeout,
            self.api_localstorage_write,
            self.api_cookie_write,
            self.dom_create_iframe,
            self.dom_create_script,
            self.dom_create_embed,
            self.dom_hidden_elements,
            self.net_fetch_count,
            self.net_xhr_count,
            self.net_distinct_hosts,
            self.net_ip_urls,
        ];

        let mut entries: Vec<(String, FeatureValue)> = Self::FIXED_KEYS
            .iter()
            .zip(counts)
            .map(|(key, value)| (key.to_string(), FeatureValue::Count(value)))
            .collect();
        entries.push((
            "dynamic_code_snippets".to_string(),
            FeatureValue::TextList(self.dynamic_code_snippets.clone()),
        ));
        for (rank, (path, count)) in self.top_calls.iter().enumerate() {
            let k = rank + 1;
            entries.push((format!("top_call_{k}"), FeatureValue::Text(path.clone())));
            entries.push((format!("top_call_{k}_count"), FeatureValue::Count(*count)));
        }
        entries
    }
}
