//! The static scanner: one generic routine over the detector tables.

use super::detectors::{all_detectors, DetectorKind, DetectorPattern};
use super::types::StaticFeatureSet;

/// Pure, stateless scanner over script text.
pub struct StaticScanner {
    detectors: Vec<DetectorPattern>,
}

impl StaticScanner {
    pub fn new() -> Self {
        let detectors = all_detectors();
        for detector in &detectors {
            if detector.regex.is_none() {
                tracing::warn!(detector = detector.name, "detector pattern failed to compile; reporting 0");
            }
        }
        Self { detectors }
    }

    /// Scan `text` against every detector.
    pub fn scan(&self, text: &str) -> StaticFeatureSet {
        let detections = self
            .detectors
            .iter()
            .map(|detector| (detector.key(), Self::evaluate(detector, text)))
            .collect();

        let (code_length, non_ascii) = utf16_profile(text);
        let non_ascii_ratio = if code_length == 0 {
            0.0
        } else {
            non_ascii as f64 / code_length as f64
        };

        StaticFeatureSet {
            detections,
            code_length,
            non_ascii_ratio,
        }
    }

    fn evaluate(detector: &DetectorPattern, text: &str) -> u64 {
        let Some(re) = detector.regex.as_ref() else {
            return 0;
        };
        match detector.kind {
            DetectorKind::Flag => u64::from(re.is_match(text)),
            DetectorKind::Count => re.find_iter(text).count() as u64,
        }
    }
}

impl Default for StaticScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// (total UTF-16 code units, code units ≥ 0x80).
///
/// Lengths are measured the way a browser measures `code.length`, so astral
/// characters count twice.
fn utf16_profile(text: &str) -> (u64, u64) {
    text.encode_utf16().fold((0, 0), |(total, wide), unit| {
        (total + 1, wide + u64::from(unit >= 0x80))
    })
}
