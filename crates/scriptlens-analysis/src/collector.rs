//! Execution-trace collection under a wall-clock bound.

use std::time::Duration;

use scriptlens_core::config::EngineConfig;
use scriptlens_core::constants::DEFAULT_TIMEOUT_SECS;
use scriptlens_core::errors::ScriptlensErrorCode;
use tracing::{debug, warn};

use crate::engine::{EnvironmentStubs, SandboxEngine, TraceSink};
use crate::trace::{CollectedTrace, ExecutionTrace, SourceScript};

/// Drives a [`SandboxEngine`] for one script and never fails.
///
/// - Completed run: every pushed event, in order.
/// - Timed-out run: the events pushed before the deadline, `timed_out` set.
/// - Failed run: an empty trace, logged at `warn`.
pub struct ExecutionTraceCollector<E> {
    engine: E,
    stubs: EnvironmentStubs,
    timeout: Duration,
}

impl<E: SandboxEngine> ExecutionTraceCollector<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            stubs: EnvironmentStubs::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Timeout and environment stubs taken from configuration.
    pub fn from_config(engine: E, config: &EngineConfig) -> Self {
        Self {
            engine,
            stubs: EnvironmentStubs {
                user_agent: config.effective_user_agent().to_string(),
                cookie: config.effective_cookie().to_string(),
            },
            timeout: config.effective_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_stubs(mut self, stubs: EnvironmentStubs) -> Self {
        self.stubs = stubs;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn collect(&self, script: &SourceScript) -> CollectedTrace {
        let env = self.stubs.for_script(script);
        let (sink, mut receiver) = TraceSink::channel();

        let outcome = tokio::time::timeout(self.timeout, self.engine.run(script, &env, sink)).await;
        // The run future is gone here, so nothing more can arrive after the drain.
        let (events, decode_errors) = receiver.drain();

        match outcome {
            Ok(Ok(())) => {
                debug!(events = events.len(), decode_errors, "engine run completed");
                CollectedTrace {
                    trace: ExecutionTrace::new(events),
                    timed_out: false,
                    decode_errors,
                }
            }
            Ok(Err(e)) => {
                warn!(
                    error = %e,
                    code = e.error_code(),
                    discarded = events.len(),
                    "engine run failed, continuing with an empty trace"
                );
                CollectedTrace::default()
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    partial_events = events.len(),
                    "engine run timed out"
                );
                CollectedTrace {
                    trace: ExecutionTrace::new(events),
                    timed_out: true,
                    decode_errors,
                }
            }
        }
    }
}
