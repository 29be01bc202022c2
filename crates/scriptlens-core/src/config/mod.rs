//! Configuration system for scriptlens.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod engine_config;
pub mod pipeline_config;
pub mod scriptlens_config;

pub use engine_config::EngineConfig;
pub use pipeline_config::PipelineConfig;
pub use scriptlens_config::{CliOverrides, ScriptlensConfig};
