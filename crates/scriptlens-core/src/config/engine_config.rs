//! Sandbox engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COOKIE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Configuration for the sandboxed execution engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Program and arguments launching the engine. Empty means no engine.
    #[serde(default)]
    pub command: Vec<String>,
    /// Wall-clock budget per run, in seconds. Default: 60.
    pub timeout_secs: Option<u64>,
    /// User agent reported to the script.
    pub user_agent: Option<String>,
    /// Cookie jar contents reported to the script. Default: empty.
    pub cookie: Option<String>,
}

impl EngineConfig {
    /// Returns the effective timeout, defaulting to 60 seconds.
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Returns the effective user agent.
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Returns the effective cookie jar contents.
    pub fn effective_cookie(&self) -> &str {
        self.cookie.as_deref().unwrap_or(DEFAULT_COOKIE)
    }
}
