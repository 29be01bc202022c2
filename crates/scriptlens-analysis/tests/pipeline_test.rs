//! End-to-end pipeline tests.

use scriptlens_analysis::collector::ExecutionTraceCollector;
use scriptlens_analysis::dynamic::DynamicFeatureSet;
use scriptlens_analysis::engine::{ConfiguredEngine, ReplayEngine};
use scriptlens_analysis::pipeline::{AnalysisRequest, Pipeline};
use scriptlens_analysis::static_scan::StaticScanner;
use scriptlens_analysis::trace::{ExecutionEvent, Literal, SourceScript};
use serde_json::{json, Map, Value};

fn metadata() -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("code-file".into(), json!("/tmp/a.js"));
    metadata.insert("page".into(), json!("https://example.com"));
    metadata.insert("api_eval".into(), json!("spoofed"));
    metadata
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(SourceScript::new("eval('alert(1)')", "https://example.com"))
        .with_metadata(metadata())
}

#[tokio::test]
async fn test_full_record() {
    let engine = ReplayEngine::from_events(vec![ExecutionEvent::call(
        "eval",
        vec![Literal::string("alert(1)")],
    )]);
    let pipeline = Pipeline::new(ExecutionTraceCollector::new(engine));
    let record = pipeline.analyze(request()).await;

    assert_eq!(record.get("api_eval"), Some(&json!(1)));
    assert_eq!(record.get("static_has_eval"), Some(&json!(1)));
    assert_eq!(record.get("dynamic_code_snippets"), Some(&json!(["alert(1)"])));
    assert_eq!(record.get("top_call_1"), Some(&json!("eval")));
    assert_eq!(record.get("top_call_1_count"), Some(&json!(1)));
    assert_eq!(record.get("timeout"), Some(&json!(0)));
    assert_eq!(record.get("page"), Some(&json!("https://example.com")));
    // Metadata keys keep their leading positions.
    let keys: Vec<&str> = record.keys().take(3).collect();
    assert_eq!(keys, ["code-file", "page", "api_eval"]);
}

#[tokio::test]
async fn test_degraded_record_has_same_shape() {
    let pipeline = Pipeline::new(ExecutionTraceCollector::new(ConfiguredEngine::Disabled));
    let record = pipeline.analyze(request()).await;

    let mut expected: Vec<String> = metadata().keys().cloned().collect();
    for key in StaticScanner::new().scan("").keys() {
        expected.push(key);
    }
    for key in DynamicFeatureSet::FIXED_KEYS {
        if !expected.iter().any(|k| k == key) {
            expected.push(key.to_string());
        }
    }
    let keys: Vec<String> = record.keys().map(str::to_string).collect();
    assert_eq!(keys, expected);

    assert_eq!(record.get("events_count"), Some(&json!(0)));
    assert_eq!(record.get("timeout"), Some(&json!(0)));
    assert_eq!(record.get("api_eval"), Some(&json!(0)));
    assert_eq!(record.get("dynamic_code_snippets"), Some(&json!([])));
    assert!(!record.contains_key("top_call_1"));
    assert_eq!(record.get("static_has_eval"), Some(&json!(1)));
}

#[tokio::test]
async fn test_record_serializes_to_one_line() {
    let pipeline = Pipeline::new(ExecutionTraceCollector::new(ConfiguredEngine::Disabled));
    let line = pipeline.analyze(request()).await.to_json_line().unwrap();
    assert!(!line.contains('\n'));
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert!(parsed.is_object());
}
