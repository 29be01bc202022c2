//! Tests for dynamic feature aggregation.

use scriptlens_analysis::dynamic::{DynamicFeatureAggregator, DynamicFeatureSet};
use scriptlens_analysis::trace::{CollectedTrace, ExecutionEvent, ExecutionTrace, Literal};
use serde_json::json;

const ORIGIN: &str = "https://example.com";

fn aggregate(events: Vec<ExecutionEvent>) -> DynamicFeatureSet {
    DynamicFeatureAggregator::aggregate(&CollectedTrace::completed(events), ORIGIN)
}

fn call(path: &str, first: &str) -> ExecutionEvent {
    ExecutionEvent::call(path, vec![Literal::string(first)])
}

#[test]
fn test_eval_snippet() {
    let set = aggregate(vec![call("eval", "alert(1)")]);
    assert_eq!(set.api_eval, 1);
    assert_eq!(set.dynamic_code_snippets, vec!["alert(1)".to_string()]);
    assert_eq!(set.events_count, 1);
    assert_eq!(set.calls_total, 1);
    assert_eq!(set.top_calls, vec![("eval".to_string(), 1)]);
}

#[test]
fn test_fetch_distinct_hosts() {
    let set = aggregate(vec![
        call("fetch", "https://a.test/x"),
        call("fetch", "https://b.test/y"),
        call("fetch", "https://a.test/z"),
    ]);
    assert_eq!(set.net_fetch_count, 3);
    assert_eq!(set.net_distinct_hosts, 2);
    assert_eq!(set.net_ip_urls, 0);
}

#[test]
fn test_fetch_ip_urls() {
    let set = aggregate(vec![
        call("fetch", "http://10.1.2.3/payload"),
        call("fetch", "//192.168.0.7/beacon"),
        call("fetch", "/local"),
    ]);
    assert_eq!(set.net_ip_urls, 2);
    assert_eq!(set.net_distinct_hosts, 3);
}

#[test]
fn test_call_ranking_ties_by_first_seen() {
    let mut events = Vec::new();
    for (path, n) in [("A", 5), ("B", 3), ("C", 3), ("D", 1)] {
        for _ in 0..n {
            events.push(ExecutionEvent::call(path, vec![]));
        }
    }
    let set = aggregate(events);
    assert_eq!(
        set.top_calls,
        vec![
            ("A".to_string(), 5),
            ("B".to_string(), 3),
            ("C".to_string(), 3)
        ]
    );
}

#[test]
fn test_document_write_scripts() {
    let html = "<p>hi</p><SCRIPT type=\"text/javascript\">var a = 1;\nrun(a);</SCRIPT>\
                <script></script><script src=x>  </script><script>b()</script>";
    let set = aggregate(vec![call("document.write", html)]);
    assert_eq!(set.api_doc_write, 1);
    assert_eq!(
        set.dynamic_code_snippets,
        vec!["var a = 1;\nrun(a);".to_string(), "b()".to_string()]
    );

    let set = aggregate(vec![call("document.write", "<div>plain</div>")]);
    assert_eq!(set.api_doc_write, 1);
    assert!(set.dynamic_code_snippets.is_empty());
}

#[test]
fn test_create_element_case_insensitive() {
    let set = aggregate(vec![
        call("document.createElement", "IFRAME"),
        call("document.createElement", "Script"),
        call("document.createElement", "embed"),
        call("document.createElement", "div"),
    ]);
    assert_eq!(set.dom_create_iframe, 1);
    assert_eq!(set.dom_create_script, 1);
    assert_eq!(set.dom_create_embed, 1);
    assert_eq!(set.calls_total, 4);
}

#[test]
fn test_set_events() {
    let set = aggregate(vec![
        ExecutionEvent::set("document.cookie", Literal::string("sid=1")),
        ExecutionEvent::set("localStorage.token", Literal::string("abc")),
        ExecutionEvent::set("el.style.display", Literal::string("none")),
        ExecutionEvent::set("el.style.visibility", Literal::string("hidden")),
        ExecutionEvent::set("el.style.display", Literal::string("block")),
        ExecutionEvent::set("el.style.display", Literal::Unresolved),
    ]);
    assert_eq!(set.sets_total, 6);
    assert_eq!(set.api_cookie_write, 1);
    assert_eq!(set.api_localstorage_write, 1);
    assert_eq!(set.dom_hidden_elements, 2);
}

#[test]
fn test_new_events() {
    let set = aggregate(vec![
        ExecutionEvent::new_instance("Function", vec![Literal::string("return 1")]),
        ExecutionEvent::new_instance("XMLHttpRequest", vec![]),
        ExecutionEvent::new_instance("Date", vec![]),
    ]);
    assert_eq!(set.news_total, 3);
    assert_eq!(set.api_new_function, 1);
    assert_eq!(set.net_xhr_count, 1);
    assert!(set.top_calls.is_empty());
}

#[test]
fn test_set_timeout_and_gets() {
    let set = aggregate(vec![
        ExecutionEvent::call("setTimeout", vec![Literal::Unresolved, Literal::Resolved(json!(10))]),
        ExecutionEvent::get("navigator.userAgent"),
        ExecutionEvent::get("document.cookie"),
    ]);
    assert_eq!(set.api_set_timeout, 1);
    assert_eq!(set.gets_total, 2);
    assert_eq!(set.api_cookie_write, 0);
    assert_eq!(set.events_count, 3);
}

#[test]
fn test_timeout_and_errors_carry_over() {
    let collected = CollectedTrace {
        trace: ExecutionTrace::new(vec![ExecutionEvent::get("x")]),
        timed_out: true,
        decode_errors: 2,
    };
    let set = DynamicFeatureAggregator::aggregate(&collected, ORIGIN);
    assert!(set.timeout);
    assert_eq!(set.errors, 2);
    assert_eq!(set.events_count, 1);
}

#[test]
fn test_incremental_matches_one_shot() {
    let events = vec![
        call("eval", "x()"),
        call("fetch", "https://a.test"),
        ExecutionEvent::get("y"),
    ];
    let mut aggregator = DynamicFeatureAggregator::new(ORIGIN);
    for event in &events {
        aggregator.observe(event);
    }
    assert_eq!(aggregator.finish(false, 0), aggregate(events));
}
