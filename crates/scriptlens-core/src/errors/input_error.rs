//! Input errors.

use std::path::PathBuf;

use super::error_code::{self, ScriptlensErrorCode};

/// Errors raised while loading the script under analysis.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No --code-file was given")]
    CodeFileNotGiven,

    #[error("Code file not found: {path}")]
    CodeFileNotFound { path: PathBuf },

    #[error("Code file unreadable: {path}: {source}")]
    CodeFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ScriptlensErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::CODE_FILE_MISSING
    }
}
