//! `scriptlens-page`: fold per-script records (one JSON object per stdin line)
//! into the page vector, printed as one JSON object.

use std::io::{self, BufRead};
use std::process::ExitCode;

use scriptlens_analysis::page::PageAggregator;
use scriptlens_cli::Emitter;
use scriptlens_core::{FeatureRecord, PipelineError};

fn read_records(input: impl BufRead) -> Result<Vec<FeatureRecord>, PipelineError> {
    let mut records = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

fn main() -> ExitCode {
    scriptlens_core::tracing::init_tracing();
    let mut emitter = Emitter::stdio();

    let code = match read_records(io::stdin().lock()) {
        Ok(records) => {
            tracing::debug!(scripts = records.len(), "aggregating page");
            emitter.emit_value(&PageAggregator::aggregate(&records))
        }
        Err(e) => emitter.emit_failure(&e),
    };
    ExitCode::from(code)
}
