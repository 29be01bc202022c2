//! Tests for trace collection under a time bound.

use std::time::Duration;

use scriptlens_analysis::collector::ExecutionTraceCollector;
use scriptlens_analysis::engine::{
    BrowserEnvironment, EnvironmentStubs, ReplayEngine, SandboxEngine, TraceSink,
};
use scriptlens_analysis::trace::{ExecutionEvent, Literal, SourceScript};
use scriptlens_core::config::EngineConfig;
use scriptlens_core::errors::EngineError;

/// Pushes its events, then never finishes.
struct StallingEngine {
    events: Vec<ExecutionEvent>,
}

impl SandboxEngine for StallingEngine {
    async fn run(
        &self,
        _script: &SourceScript,
        _env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        for event in &self.events {
            sink.push(event.clone());
        }
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// Pushes its events, then fails.
struct FailingEngine;

impl SandboxEngine for FailingEngine {
    async fn run(
        &self,
        _script: &SourceScript,
        _env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        sink.push(ExecutionEvent::get("window"));
        Err(EngineError::Exited {
            status: "exit status: 3".into(),
        })
    }
}

/// Echoes the environment it was given as a Get event path.
struct EchoEnvironment;

impl SandboxEngine for EchoEnvironment {
    async fn run(
        &self,
        _script: &SourceScript,
        env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        sink.push(ExecutionEvent::get(format!(
            "{}|{}|{}",
            env.origin, env.user_agent, env.cookie
        )));
        Ok(())
    }
}

fn script() -> SourceScript {
    SourceScript::new("eval('1')", "https://example.com")
}

#[tokio::test(start_paused = true)]
async fn test_timeout_keeps_partial_events() {
    let engine = StallingEngine {
        events: vec![
            ExecutionEvent::call("eval", vec![Literal::string("a()")]),
            ExecutionEvent::get("document.body"),
        ],
    };
    let collector = ExecutionTraceCollector::new(engine).with_timeout(Duration::from_secs(60));

    let collected = collector.collect(&script()).await;
    assert!(collected.timed_out);
    assert_eq!(collected.trace.len(), 2);
    assert_eq!(collected.trace.events()[0].path(), "eval");
}

#[tokio::test(start_paused = true)]
async fn test_timeout_with_no_events() {
    let collector = ExecutionTraceCollector::new(StallingEngine { events: vec![] })
        .with_timeout(Duration::from_secs(5));
    let collected = collector.collect(&script()).await;
    assert!(collected.timed_out);
    assert!(collected.trace.is_empty());
}

#[tokio::test]
async fn test_engine_failure_degrades_to_empty_trace() {
    let collected = ExecutionTraceCollector::new(FailingEngine)
        .collect(&script())
        .await;
    assert!(!collected.timed_out);
    assert!(collected.trace.is_empty());
    assert_eq!(collected.decode_errors, 0);
}

#[tokio::test]
async fn test_malformed_entries_are_counted() {
    let engine = ReplayEngine::from_text(
        "{\"type\":\"Get\",\"path\":\"a\"}\nnot json\n{\"type\":\"Bogus\"}\n{\"type\":\"GetEvent\",\"path\":\"b\"}\n",
    );
    let collected = ExecutionTraceCollector::new(engine).collect(&script()).await;
    assert!(!collected.timed_out);
    assert_eq!(collected.decode_errors, 2);
    let paths: Vec<&str> = collected.trace.events().iter().map(|e| e.path()).collect();
    assert_eq!(paths, ["a", "b"]);
}

#[tokio::test]
async fn test_environment_stubs() {
    let collected = ExecutionTraceCollector::new(EchoEnvironment)
        .collect(&script())
        .await;
    assert_eq!(
        collected.trace.events()[0].path(),
        "https://example.com|Mozilla/5.0 (Windows NT 10.0; Win64; x64)|"
    );

    let stubs = EnvironmentStubs {
        user_agent: "agent".into(),
        cookie: "sid=1".into(),
    };
    let collected = ExecutionTraceCollector::new(EchoEnvironment)
        .with_stubs(stubs)
        .collect(&script())
        .await;
    assert_eq!(collected.trace.events()[0].path(), "https://example.com|agent|sid=1");
}

#[test]
fn test_from_config() {
    let config = EngineConfig {
        timeout_secs: Some(7),
        ..Default::default()
    };
    let collector = ExecutionTraceCollector::from_config(EchoEnvironment, &config);
    assert_eq!(collector.timeout(), Duration::from_secs(7));
}
