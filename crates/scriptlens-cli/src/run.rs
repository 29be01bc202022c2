//! One `scriptlens` invocation, from parsed flags to the finished record.

use scriptlens_analysis::collector::ExecutionTraceCollector;
use scriptlens_analysis::engine::ConfiguredEngine;
use scriptlens_analysis::pipeline::{AnalysisRequest, Pipeline};
use scriptlens_analysis::trace::SourceScript;
use scriptlens_core::config::{CliOverrides, ScriptlensConfig};
use scriptlens_core::errors::InputError;
use scriptlens_core::{FeatureRecord, PipelineError};
use url::Url;

use crate::args::{Invocation, PAGE_FLAG};

/// Serialized origin of `page`, e.g. `https://example.com` for `https://example.com/a?b`.
pub fn derive_origin(page: &str) -> Result<String, PipelineError> {
    let url = Url::parse(page).map_err(|e| PipelineError::InvalidUrl {
        field: PAGE_FLAG.to_string(),
        url: page.to_string(),
        message: e.to_string(),
    })?;
    Ok(url.origin().ascii_serialization())
}

/// The script file is checked before anything else.
pub async fn analyze_invocation(invocation: Invocation) -> Result<FeatureRecord, PipelineError> {
    let Invocation {
        code_file,
        page,
        origin,
        timeout_secs,
        trace_file,
        metadata,
    } = invocation;

    let code_file = code_file.ok_or(InputError::CodeFileNotGiven)?;
    let text = SourceScript::read_text(&code_file)?;

    let cwd = std::env::current_dir()?;
    let config = ScriptlensConfig::load(&cwd, Some(&CliOverrides { timeout_secs }))?;

    let origin = match origin {
        Some(origin) => origin,
        None => {
            let page = page.unwrap_or_else(|| config.pipeline.effective_default_page().to_string());
            derive_origin(&page)?
        }
    };
    tracing::debug!(
        code_file = %code_file.display(),
        %origin,
        timeout_secs = config.engine.effective_timeout().as_secs(),
        "starting analysis"
    );

    let engine = ConfiguredEngine::from_config(&config.engine, trace_file);
    let pipeline = Pipeline::new(ExecutionTraceCollector::from_config(engine, &config.engine));
    let request = AnalysisRequest::new(SourceScript::new(text, origin)).with_metadata(metadata);
    Ok(pipeline.analyze(request).await)
}
