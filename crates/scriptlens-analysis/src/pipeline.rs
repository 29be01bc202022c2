//! End-to-end analysis of one script.

use scriptlens_core::FeatureRecord;
use serde_json::{Map, Value};
use tracing::{debug, info_span, Instrument};

use crate::assembler::FeatureRecordAssembler;
use crate::collector::ExecutionTraceCollector;
use crate::dynamic::DynamicFeatureAggregator;
use crate::engine::SandboxEngine;
use crate::static_scan::StaticScanner;
use crate::trace::SourceScript;

/// One script plus the caller metadata passed through into the record.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub script: SourceScript,
    pub metadata: Map<String, Value>,
}

impl AnalysisRequest {
    pub fn new(script: SourceScript) -> Self {
        Self {
            script,
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

pub struct Pipeline<E> {
    scanner: StaticScanner,
    collector: ExecutionTraceCollector<E>,
}

impl<E: SandboxEngine> Pipeline<E> {
    pub fn new(collector: ExecutionTraceCollector<E>) -> Self {
        Self {
            scanner: StaticScanner::new(),
            collector,
        }
    }

    /// Never fails: engine trouble degrades the dynamic half of the record.
    pub async fn analyze(&self, request: AnalysisRequest) -> FeatureRecord {
        let AnalysisRequest { script, metadata } = request;
        let span = info_span!("analyze", origin = script.origin(), bytes = script.text().len());

        async {
            let static_features = self.scanner.scan(script.text());
            let collected = self.collector.collect(&script).await;
            let dynamic_features = DynamicFeatureAggregator::aggregate(&collected, script.origin());
            debug!(
                events = dynamic_features.events_count,
                timed_out = dynamic_features.timeout,
                "features extracted"
            );
            FeatureRecordAssembler::assemble(&metadata, &static_features, &dynamic_features)
        }
        .instrument(span)
        .await
    }
}
