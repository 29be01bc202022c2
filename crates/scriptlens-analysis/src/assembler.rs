//! Merge of metadata, static and dynamic features into one record.

use scriptlens_core::{FeatureRecord, FeatureSource};
use serde_json::{Map, Value};

use crate::dynamic::DynamicFeatureSet;
use crate::static_scan::StaticFeatureSet;

/// Builds the flat record. Precedence on key collision: metadata < static < dynamic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureRecordAssembler;

impl FeatureRecordAssembler {
    pub fn assemble(
        metadata: &Map<String, Value>,
        static_features: &StaticFeatureSet,
        dynamic_features: &DynamicFeatureSet,
    ) -> FeatureRecord {
        Self::assemble_sources(
            metadata,
            &[static_features as &dyn FeatureSource, dynamic_features],
        )
    }

    /// Metadata followed by `sources` in increasing precedence.
    pub fn assemble_sources(
        metadata: &Map<String, Value>,
        sources: &[&dyn FeatureSource],
    ) -> FeatureRecord {
        let mut record = FeatureRecord::new();
        record.merge_map(metadata);
        for source in sources {
            record.merge_source(*source);
        }
        record
    }
}
