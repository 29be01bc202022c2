//! Static (lexical) inspection of script source.
//!
//! Every input yields the same key set: one flag per flag detector, one count
//! per count detector, the UTF-16 length, and the non-ASCII ratio.

pub mod detectors;
pub mod scanner;
pub mod types;

pub use detectors::{all_detectors, DetectorKind, DetectorPattern};
pub use scanner::StaticScanner;
pub use types::StaticFeatureSet;
