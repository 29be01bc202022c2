//! Top-level scriptlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EngineConfig, PipelineConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "scriptlens.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SCRIPTLENS_*`)
/// 3. Project config (`scriptlens.toml` in the working directory)
/// 4. User config (`~/.scriptlens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScriptlensConfig {
    pub engine: EngineConfig,
    pub pipeline: PipelineConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
}

impl ScriptlensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ScriptlensConfig) -> Result<(), ConfigError> {
        if config.engine.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.engine.command.first().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.command".to_string(),
                message: "program must not be blank".to_string(),
            });
        }
        if let Some(page) = &config.pipeline.default_page {
            if page.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "pipeline.default_page".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".scriptlens").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ScriptlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ScriptlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut ScriptlensConfig, other: &ScriptlensConfig) {
        if !other.engine.command.is_empty() {
            base.engine.command = other.engine.command.clone();
        }
        if other.engine.timeout_secs.is_some() {
            base.engine.timeout_secs = other.engine.timeout_secs;
        }
        if other.engine.user_agent.is_some() {
            base.engine.user_agent = other.engine.user_agent.clone();
        }
        if other.engine.cookie.is_some() {
            base.engine.cookie = other.engine.cookie.clone();
        }
        if other.pipeline.default_page.is_some() {
            base.pipeline.default_page = other.pipeline.default_page.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SCRIPTLENS_ENGINE_COMMAND`, `SCRIPTLENS_TIMEOUT_SECS`, etc.
    fn apply_env_overrides(config: &mut ScriptlensConfig) {
        if let Ok(val) = std::env::var("SCRIPTLENS_ENGINE_COMMAND") {
            let command: Vec<String> = val.split_whitespace().map(str::to_string).collect();
            if !command.is_empty() {
                config.engine.command = command;
            }
        }
        if let Ok(val) = std::env::var("SCRIPTLENS_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.engine.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SCRIPTLENS_USER_AGENT") {
            config.engine.user_agent = Some(val);
        }
        if let Ok(val) = std::env::var("SCRIPTLENS_COOKIE") {
            config.engine.cookie = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ScriptlensConfig, cli: &CliOverrides) {
        if let Some(v) = cli.timeout_secs {
            config.engine.timeout_secs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
