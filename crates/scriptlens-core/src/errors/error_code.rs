//! ScriptlensErrorCode trait for structured diagnostics.

/// Trait for mapping scriptlens errors to stable diagnostic codes.
/// Every error enum implements this so the CLI can report a machine-readable
/// code on the error channel.
pub trait ScriptlensErrorCode {
    /// Returns the diagnostic code string (e.g., "code_file_missing").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[code] message`.
    fn diagnostic_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Diagnostic codes.
pub const CODE_FILE_MISSING: &str = "code_file_missing";
pub const CONFIG_ERROR: &str = "config_error";
pub const ENGINE_NOT_CONFIGURED: &str = "engine_not_configured";
pub const ENGINE_ERROR: &str = "engine_error";
pub const INVALID_URL: &str = "invalid_url";
pub const SERIALIZATION_ERROR: &str = "serialization_error";
pub const IO_ERROR: &str = "io_error";
