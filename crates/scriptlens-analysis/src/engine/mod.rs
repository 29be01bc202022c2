//! The sandboxed execution engine contract and the engines shipped with scriptlens.
//!
//! An engine runs a script inside an emulated browser and pushes every
//! intercepted operation into a [`TraceSink`] in the order it happened. Engines
//! have no time bound of their own; the collector enforces one.

pub mod configured;
pub mod process;
pub mod replay;
pub mod sink;

use std::future::Future;

use scriptlens_core::errors::EngineError;

use crate::trace::SourceScript;

pub use configured::ConfiguredEngine;
pub use process::ProcessEngine;
pub use replay::ReplayEngine;
pub use sink::{TraceReceiver, TraceSink};

/// The fake browser context a script observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEnvironment {
    pub origin: String,
    pub user_agent: String,
    pub cookie: String,
}

/// Fixed environment stubs applied to every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStubs {
    pub user_agent: String,
    pub cookie: String,
}

impl Default for EnvironmentStubs {
    fn default() -> Self {
        Self {
            user_agent: scriptlens_core::constants::DEFAULT_USER_AGENT.to_string(),
            cookie: scriptlens_core::constants::DEFAULT_COOKIE.to_string(),
        }
    }
}

impl EnvironmentStubs {
    /// The environment for one script.
    pub fn for_script(&self, script: &SourceScript) -> BrowserEnvironment {
        BrowserEnvironment {
            origin: script.origin().to_string(),
            user_agent: self.user_agent.clone(),
            cookie: self.cookie.clone(),
        }
    }
}

/// A sandboxed execution engine.
pub trait SandboxEngine: Send + Sync {
    /// Run `script` to completion, pushing events into `sink` as they occur.
    fn run(
        &self,
        script: &SourceScript,
        env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> impl Future<Output = Result<(), EngineError>> + Send;
}
