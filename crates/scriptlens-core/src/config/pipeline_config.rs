//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_URL;

/// Configuration for the feature pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Page URL used when `--page` is absent. Default: `https://example.com`.
    pub default_page: Option<String>,
}

impl PipelineConfig {
    pub fn effective_default_page(&self) -> &str {
        self.default_page.as_deref().unwrap_or(DEFAULT_PAGE_URL)
    }
}
