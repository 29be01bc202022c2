//! scriptlens-analysis: the feature-extraction pipeline.
//!
//! text → [`static_scan`] → static features; text → [`collector`] (driving an
//! [`engine`]) → trace → [`dynamic`] → dynamic features; both plus caller
//! metadata → [`assembler`] → one flat [`FeatureRecord`](scriptlens_core::FeatureRecord).

pub mod assembler;
pub mod collector;
pub mod dynamic;
pub mod engine;
pub mod page;
pub mod pipeline;
pub mod static_scan;
pub mod trace;

pub use assembler::FeatureRecordAssembler;
pub use collector::ExecutionTraceCollector;
pub use dynamic::{DynamicFeatureAggregator, DynamicFeatureSet};
pub use engine::{BrowserEnvironment, SandboxEngine, TraceSink};
pub use page::{PageAggregator, PageVector};
pub use pipeline::{AnalysisRequest, Pipeline};
pub use static_scan::{StaticFeatureSet, StaticScanner};
pub use trace::{CollectedTrace, ExecutionEvent, ExecutionTrace, Literal, SourceScript};
