//! Declarative detector tables for the static scanner.

use regex::Regex;
use std::sync::LazyLock;

/// How a detector contributes to the feature set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    /// 1 if the pattern matches anywhere, else 0. Key: `static_has_<name>`.
    Flag,
    /// Number of non-overlapping matches. Key: `static_count_<name>`.
    Count,
}

impl DetectorKind {
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Flag => "static_has_",
            Self::Count => "static_count_",
        }
    }
}

/// A compiled detector.
pub struct DetectorPattern {
    pub name: &'static str,
    pub kind: DetectorKind,
    pub regex: &'static LazyLock<Option<Regex>>,
}

impl DetectorPattern {
    /// Feature key this detector writes.
    pub fn key(&self) -> String {
        format!("{}{}", self.kind.key_prefix(), self.name)
    }
}

macro_rules! detector_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Flags ──────────────────────────────────────────────────────────────────
// Case folding is scoped to ASCII (`(?i-u:..)`) so `ſ` or the Kelvin sign never
// stand in for `s`/`k`. `\s` and `.` stay Unicode-aware.
detector_pattern!(RE_EVAL, r"(?i-u:eval)\s*\(");
detector_pattern!(RE_UNESCAPE, r"(?i-u:unescape)\s*\(");
detector_pattern!(RE_FROM_CHAR_CODE, r"(?i-u:String\.fromCharCode)");
detector_pattern!(RE_DOCUMENT_WRITE, r"(?i-u:document\.write)");
detector_pattern!(RE_IFRAME, r"(?i-u:<iframe)");
detector_pattern!(
    RE_HIDDEN_ELEMENT,
    r#"(?i-u:style)\s*=\s*['"](?:.*(?i-u:display:)\s*(?i-u:none)|(?i-u:visibility:)\s*(?i-u:hidden))"#
);
detector_pattern!(RE_CRYPTO, r"(?i-u:crypto\.(?:subtle|getRandomValues))");
detector_pattern!(RE_WEBSOCKET, r"(?i-u:new)\s+(?i-u:WebSocket)");
detector_pattern!(RE_AD_KEYWORDS, r"(?i-u:banner|ad-slot|prebid)");
detector_pattern!(RE_EXPLOIT, r"(?i-u:CVE-)[0-9]{4}-[0-9]{4,}");

// ── Counts ─────────────────────────────────────────────────────────────────
// A hex-byte token is `0x` or `\x` followed by one or two hex digits.
detector_pattern!(RE_HEX_STRING, r"(?:(?:0x|\\x)[0-9a-fA-F]{1,2}){10,}");
detector_pattern!(RE_BASE64_LIKE, r"[A-Za-z0-9+/]{50,}={0,2}");
detector_pattern!(
    RE_IP_ADDRESS,
    r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}"
);
detector_pattern!(RE_OBFUSCATED_VAR, r"_0x[a-fA-F0-9]{4,}");

/// All detectors in emission order: flags first, then counts.
pub fn all_detectors() -> Vec<DetectorPattern> {
    vec![
        DetectorPattern {
            name: "eval",
            kind: DetectorKind::Flag,
            regex: &RE_EVAL,
        },
        DetectorPattern {
            name: "unescape",
            kind: DetectorKind::Flag,
            regex: &RE_UNESCAPE,
        },
        DetectorPattern {
            name: "fromCharCode",
            kind: DetectorKind::Flag,
            regex: &RE_FROM_CHAR_CODE,
        },
        DetectorPattern {
            name: "documentWrite",
            kind: DetectorKind::Flag,
            regex: &RE_DOCUMENT_WRITE,
        },
        DetectorPattern {
            name: "iframe",
            kind: DetectorKind::Flag,
            regex: &RE_IFRAME,
        },
        DetectorPattern {
            name: "hiddenElement",
            kind: DetectorKind::Flag,
            regex: &RE_HIDDEN_ELEMENT,
        },
        DetectorPattern {
            name: "crypto",
            kind: DetectorKind::Flag,
            regex: &RE_CRYPTO,
        },
        DetectorPattern {
            name: "websocket",
            kind: DetectorKind::Flag,
            regex: &RE_WEBSOCKET,
        },
        DetectorPattern {
            name: "adKeywords",
            kind: DetectorKind::Flag,
            regex: &RE_AD_KEYWORDS,
        },
        DetectorPattern {
            name: "exploit",
            kind: DetectorKind::Flag,
            regex: &RE_EXPLOIT,
        },
        DetectorPattern {
            name: "hexString",
            kind: DetectorKind::Count,
            regex: &RE_HEX_STRING,
        },
        DetectorPattern {
            name: "base64Like",
            kind: DetectorKind::Count,
            regex: &RE_BASE64_LIKE,
        },
        DetectorPattern {
            name: "ipAddress",
            kind: DetectorKind::Count,
            regex: &RE_IP_ADDRESS,
        },
        DetectorPattern {
            name: "obfuscatedVar",
            kind: DetectorKind::Count,
            regex: &RE_OBFUSCATED_VAR,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_detector_compiles() {
        for detector in all_detectors() {
            assert!(
                detector.regex.is_some(),
                "detector '{}' failed to compile",
                detector.name
            );
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<String> = all_detectors().iter().map(DetectorPattern::key).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn hidden_element_requires_inline_style() {
        let Some(re) = RE_HIDDEN_ELEMENT.as_ref() else {
            panic!("hidden element pattern must compile");
        };
        assert!(re.is_match(r#"<div style="color:red; display: none">"#));
        assert!(re.is_match(r#"<div style='visibility:hidden'>"#));
        assert!(!re.is_match("el.style.display = 'none'"));
    }
}
