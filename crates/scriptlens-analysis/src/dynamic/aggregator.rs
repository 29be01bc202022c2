//! Single left-to-right pass from events to dynamic features.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use scriptlens_core::constants::TOP_CALLS;
use url::{Host, Url};

use super::ranking::CallCounter;
use super::types::DynamicFeatureSet;
use crate::trace::{CollectedTrace, ExecutionEvent, Literal};

static SCRIPT_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<script").ok());
static SCRIPT_BODY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").ok());

/// Accumulates dynamic features one event at a time.
#[derive(Debug)]
pub struct DynamicFeatureAggregator {
    base: Option<Url>,
    features: DynamicFeatureSet,
    calls: CallCounter,
    hosts: FxHashSet<String>,
}

impl DynamicFeatureAggregator {
    /// `origin` resolves relative fetch URLs. An unparseable origin only
    /// lets absolute URLs resolve.
    pub fn new(origin: &str) -> Self {
        Self {
            base: Url::parse(origin).ok(),
            features: DynamicFeatureSet::default(),
            calls: CallCounter::new(),
            hosts: FxHashSet::default(),
        }
    }

    /// Aggregate a whole collected trace.
    pub fn aggregate(collected: &CollectedTrace, origin: &str) -> DynamicFeatureSet {
        let mut aggregator = Self::new(origin);
        for event in collected.trace.events() {
            aggregator.observe(event);
        }
        aggregator.finish(collected.timed_out, collected.decode_errors)
    }

    pub fn observe(&mut self, event: &ExecutionEvent) {
        self.features.events_count += 1;
        match event {
            ExecutionEvent::Call { path, arguments } => {
                self.features.calls_total += 1;
                self.calls.record(path);
                self.observe_call(path, arguments.first());
            }
            ExecutionEvent::Get { .. } => {
                self.features.gets_total += 1;
            }
            ExecutionEvent::Set { path, value } => {
                self.features.sets_total += 1;
                self.observe_set(path, value);
            }
            ExecutionEvent::New { path, .. } => {
                self.features.news_total += 1;
                match path.as_str() {
                    "Function" => self.features.api_new_function += 1,
                    "XMLHttpRequest" => self.features.net_xhr_count += 1,
                    _ => {}
                }
            }
        }
    }

    pub fn finish(mut self, timed_out: bool, decode_errors: u64) -> DynamicFeatureSet {
        self.features.net_distinct_hosts = self.hosts.len() as u64;
        self.features.top_calls = self.calls.top(TOP_CALLS);
        self.features.timeout = timed_out;
        self.features.errors = decode_errors;
        self.features
    }

    fn observe_call(&mut self, path: &str, first: Option<&Literal>) {
        let first = first.and_then(Literal::as_str);
        match path {
            "eval" => {
                self.features.api_eval += 1;
                if let Some(code) = first.filter(|code| !code.trim().is_empty()) {
                    self.features.dynamic_code_snippets.push(code.to_string());
                }
            }
            "document.write" => {
                self.features.api_doc_write += 1;
                if let Some(html) = first {
                    self.extract_scripts(html);
                }
            }
            "setTimeout" => self.features.api_set_timeout += 1,
            "fetch" => {
                self.features.net_fetch_count += 1;
                if let Some(target) = first {
                    self.observe_fetch(target);
                }
            }
            "document.createElement" => {
                let Some(tag) = first else { return };
                match tag.to_ascii_lowercase().as_str() {
                    "iframe" => self.features.dom_create_iframe += 1,
                    "script" => self.features.dom_create_script += 1,
                    "embed" => self.features.dom_create_embed += 1,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn observe_set(&mut self, path: &str, value: &Literal) {
        if path.starts_with("document.cookie") {
            self.features.api_cookie_write += 1;
        }
        if path.starts_with("localStorage.") {
            self.features.api_localstorage_write += 1;
        }
        if path.contains(".style.display") || path.contains(".style.visibility") {
            let text = value.text_form();
            if text.contains("none") || text.contains("hidden") {
                self.features.dom_hidden_elements += 1;
            }
        }
    }

    fn extract_scripts(&mut self, html: &str) {
        let (Some(tag), Some(body)) = (SCRIPT_TAG.as_ref(), SCRIPT_BODY.as_ref()) else {
            return;
        };
        if !tag.is_match(html) {
            return;
        }
        for captures in body.captures_iter(html) {
            if let Some(code) = captures.get(1).map(|m| m.as_str()) {
                if !code.trim().is_empty() {
                    self.features.dynamic_code_snippets.push(code.to_string());
                }
            }
        }
    }

    fn observe_fetch(&mut self, target: &str) {
        let resolved = match Url::options().base_url(self.base.as_ref()).parse(target) {
            Ok(url) => url,
            Err(e) => {
                tracing::trace!(target_url = target, error = %e, "fetch target unresolvable");
                return;
            }
        };
        if matches!(resolved.host(), Some(Host::Ipv4(_))) {
            self.features.net_ip_urls += 1;
        }
        self.hosts
            .insert(resolved.host_str().unwrap_or_default().to_string());
    }
}
