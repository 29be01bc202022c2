//! Error handling for scriptlens.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::ScriptlensErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
