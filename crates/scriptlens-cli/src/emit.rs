//! Record and diagnostic output.
//!
//! stdout carries exactly one JSON line on success and nothing otherwise.
//! Failures are one JSON object on stderr.

use std::io::{self, Write};

use scriptlens_core::errors::pipeline_error::EXIT_OK;
use scriptlens_core::{FeatureRecord, PipelineError, ScriptlensErrorCode};
use serde_json::json;

pub struct Emitter<O, E> {
    out: O,
    err: E,
}

impl Emitter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Emitter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write the record as one line and return the exit code.
    pub fn emit_record(&mut self, record: &FeatureRecord) -> u8 {
        let line = match record.to_json_line() {
            Ok(line) => line,
            Err(e) => return self.emit_failure(&PipelineError::Serialization(e)),
        };
        self.emit_line(&line)
    }

    /// Write any serializable value as one line and return the exit code.
    pub fn emit_value(&mut self, value: &impl serde::Serialize) -> u8 {
        match serde_json::to_string(value) {
            Ok(line) => self.emit_line(&line),
            Err(e) => self.emit_failure(&PipelineError::Serialization(e)),
        }
    }

    /// Report a failure on stderr and return its exit code.
    pub fn emit_failure(&mut self, error: &PipelineError) -> u8 {
        let diagnostic = if error.is_expected() {
            tracing::debug!(error = %error, code = error.error_code(), "invocation rejected");
            json!({ "error": error.error_code() })
        } else {
            tracing::error!(error = %error, code = error.error_code(), "invocation failed");
            json!({ "fatal": error.to_string() })
        };
        // Nothing left to report to if stderr itself is gone.
        let _ = writeln!(self.err, "{diagnostic}").and_then(|()| self.err.flush());
        error.exit_code()
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit_line(&mut self, line: &str) -> u8 {
        match writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            Ok(()) => EXIT_OK,
            Err(e) => self.emit_failure(&PipelineError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptlens_core::errors::InputError;

    fn emitter() -> Emitter<Vec<u8>, Vec<u8>> {
        Emitter::new(Vec::new(), Vec::new())
    }

    #[test]
    fn record_is_one_line_on_stdout() {
        let mut record = FeatureRecord::new();
        record.insert("api_eval", 1u64);
        record.insert("dynamic_code_snippets", json!(["a\nb"]));

        let mut emitter = emitter();
        assert_eq!(emitter.emit_record(&record), 0);
        let (out, err) = emitter.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with('\n'));
        assert!(err.is_empty());
    }

    #[test]
    fn missing_input_is_an_expected_error() {
        let mut emitter = emitter();
        let code = emitter.emit_failure(&InputError::CodeFileNotGiven.into());
        assert_eq!(code, 2);
        let (out, err) = emitter.into_parts();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "{\"error\":\"code_file_missing\"}\n");
    }

    #[test]
    fn other_failures_are_fatal() {
        let mut emitter = emitter();
        let error = PipelineError::InvalidUrl {
            field: "page".into(),
            url: "::".into(),
            message: "relative URL without a base".into(),
        };
        assert_eq!(emitter.emit_failure(&error), 1);
        let (_, err) = emitter.into_parts();
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("{\"fatal\":"));
    }
}
