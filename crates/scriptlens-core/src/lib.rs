//! scriptlens-core: shared types, errors, configuration, and tracing for the
//! scriptlens JavaScript feature extractor.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use errors::{PipelineError, ScriptlensErrorCode};
pub use types::{FeatureRecord, FeatureSource, FeatureValue};
