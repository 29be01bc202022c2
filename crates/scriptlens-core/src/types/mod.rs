//! Feature values and the flat feature record handed to the classifier.

pub mod feature;
pub mod record;

pub use feature::{FeatureSource, FeatureValue};
pub use record::FeatureRecord;
