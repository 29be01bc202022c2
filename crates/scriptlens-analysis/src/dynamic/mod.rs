//! Dynamic-behaviour aggregation over an execution trace.

pub mod aggregator;
pub mod ranking;
pub mod types;

pub use aggregator::DynamicFeatureAggregator;
pub use ranking::CallCounter;
pub use types::DynamicFeatureSet;
