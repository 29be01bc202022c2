//! Sandbox engine errors.
//!
//! These never cross the trace collector: the collector logs them and degrades
//! to an empty trace.

use std::path::PathBuf;

use super::error_code::{self, ScriptlensErrorCode};

/// Errors that can occur while driving the sandboxed execution engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No sandbox engine command configured")]
    NotConfigured,

    #[error("Failed to launch engine `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Engine I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine exited unsuccessfully: {status}")]
    Exited { status: String },

    #[error("Recorded trace {path} unreadable: {message}")]
    Replay { path: PathBuf, message: String },
}

impl ScriptlensErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => error_code::ENGINE_NOT_CONFIGURED,
            _ => error_code::ENGINE_ERROR,
        }
    }
}
