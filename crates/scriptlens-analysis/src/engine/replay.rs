//! Engine that replays a recorded trace instead of executing anything.

use std::path::PathBuf;

use scriptlens_core::errors::EngineError;
use serde_json::Value;

use super::{BrowserEnvironment, SandboxEngine, TraceSink};
use crate::trace::{decode_line, decode_value, ExecutionEvent, SourceScript};

#[derive(Debug, Clone)]
enum Recording {
    File(PathBuf),
    Text(String),
    Events(Vec<ExecutionEvent>),
}

/// Replays a recorded trace: a JSON array of events or one event per line.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    recording: Recording,
}

impl ReplayEngine {
    /// Replay the file at `path`. The file is read when the run starts.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            recording: Recording::File(path.into()),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            recording: Recording::Text(text.into()),
        }
    }

    pub fn from_events(events: Vec<ExecutionEvent>) -> Self {
        Self {
            recording: Recording::Events(events),
        }
    }

    fn push_text(text: &str, sink: &TraceSink) {
        // A whole-document array first, then line-delimited events.
        if let Ok(value @ Value::Array(_)) = serde_json::from_str::<Value>(text) {
            for entry in decode_value(value) {
                sink.push_entry(entry);
            }
            return;
        }
        for line in text.lines() {
            for entry in decode_line(line) {
                sink.push_entry(entry);
            }
        }
    }
}

impl SandboxEngine for ReplayEngine {
    async fn run(
        &self,
        _script: &SourceScript,
        _env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        match &self.recording {
            Recording::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| EngineError::Replay {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                Self::push_text(&text, &sink);
            }
            Recording::Text(text) => Self::push_text(text, &sink),
            Recording::Events(events) => {
                for event in events {
                    sink.push(event.clone());
                }
            }
        }
        Ok(())
    }
}
