//! The script under analysis.

use std::path::Path;

use scriptlens_core::errors::InputError;

/// Immutable script text plus the origin used to resolve relative references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceScript {
    text: String,
    origin: String,
}

impl SourceScript {
    pub fn new(text: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: origin.into(),
        }
    }

    /// Read a script from disk. A missing or unreadable file is an [`InputError`].
    pub fn load(path: &Path, origin: impl Into<String>) -> Result<Self, InputError> {
        Ok(Self::new(Self::read_text(path)?, origin))
    }

    /// Read script text, replacing invalid UTF-8 sequences.
    pub fn read_text(path: &Path) -> Result<String, InputError> {
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => InputError::CodeFileNotFound {
                path: path.to_path_buf(),
            },
            _ => InputError::CodeFileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;
        // Pages routinely ship scripts with stray invalid bytes.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}
