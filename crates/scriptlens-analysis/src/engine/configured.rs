//! Engine selection from configuration.

use std::path::PathBuf;

use scriptlens_core::config::EngineConfig;
use scriptlens_core::errors::EngineError;

use super::{BrowserEnvironment, ProcessEngine, ReplayEngine, SandboxEngine, TraceSink};
use crate::trace::SourceScript;

/// The engine an invocation runs with.
#[derive(Debug, Clone)]
pub enum ConfiguredEngine {
    Process(ProcessEngine),
    Replay(ReplayEngine),
    /// No engine configured: every run fails and the record degrades to static-only.
    Disabled,
}

impl ConfiguredEngine {
    /// A recorded trace wins over the configured command.
    pub fn from_config(config: &EngineConfig, trace_file: Option<PathBuf>) -> Self {
        if let Some(path) = trace_file {
            return Self::Replay(ReplayEngine::from_path(path));
        }
        match ProcessEngine::new(&config.command) {
            Ok(engine) => Self::Process(engine),
            Err(_) => Self::Disabled,
        }
    }
}

impl SandboxEngine for ConfiguredEngine {
    async fn run(
        &self,
        script: &SourceScript,
        env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        match self {
            Self::Process(engine) => engine.run(script, env, sink).await,
            Self::Replay(engine) => engine.run(script, env, sink).await,
            Self::Disabled => Err(EngineError::NotConfigured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_disables_engine() {
        let engine = ConfiguredEngine::from_config(&EngineConfig::default(), None);
        assert!(matches!(engine, ConfiguredEngine::Disabled));
    }

    #[test]
    fn trace_file_selects_replay() {
        let config = EngineConfig {
            command: vec!["node".into(), "runner.mjs".into()],
            ..Default::default()
        };
        let engine = ConfiguredEngine::from_config(&config, Some(PathBuf::from("trace.json")));
        assert!(matches!(engine, ConfiguredEngine::Replay(_)));

        let engine = ConfiguredEngine::from_config(&config, None);
        assert!(matches!(engine, ConfiguredEngine::Process(ref p) if p.program() == "node"));
    }
}
