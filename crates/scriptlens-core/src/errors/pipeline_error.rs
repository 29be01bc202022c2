//! Top-level pipeline errors and their exit codes.

use super::error_code::{self, ScriptlensErrorCode};
use super::{ConfigError, EngineError, InputError};

/// Exit code for a successful invocation.
pub const EXIT_OK: u8 = 0;
/// Exit code for any unexpected failure.
pub const EXIT_FATAL: u8 = 1;
/// Exit code when the script under analysis is missing or unreadable.
pub const EXIT_INPUT_MISSING: u8 = 2;

/// Errors that terminate an invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid URL for {field}: {url} ({message})")]
    InvalidUrl {
        field: String,
        url: String,
        message: String,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// True for conditions reported as `{"error": code}` rather than `{"fatal": message}`.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => EXIT_INPUT_MISSING,
            _ => EXIT_FATAL,
        }
    }
}

impl ScriptlensErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Engine(e) => e.error_code(),
            Self::InvalidUrl { .. } => error_code::INVALID_URL,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
