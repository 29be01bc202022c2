//! `--key value` argument parsing.
//!
//! Every flag is kept, in argv order, as record metadata. A flag with no value
//! (end of argv, or the next token is another flag) is `true`.

use std::path::PathBuf;

use serde_json::{Map, Value};

pub const CODE_FILE_FLAG: &str = "code-file";
pub const PAGE_FLAG: &str = "page";
pub const ORIGIN_FLAG: &str = "origin";
pub const TIMEOUT_FLAG: &str = "timeout";
pub const TRACE_FILE_FLAG: &str = "trace-file";

/// Parse `--key value` pairs. Tokens that are not flags and not a flag's value are ignored.
pub fn parse_flag_args<I>(args: I) -> Map<String, Value>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Map::new();
    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        let Some(key) = arg.strip_prefix("--") else {
            continue;
        };
        let value = match args.next_if(|next| !next.starts_with("--")) {
            Some(value) => Value::String(value),
            None => Value::Bool(true),
        };
        parsed.insert(key.to_string(), value);
    }
    parsed
}

/// The flags the pipeline itself interprets, plus the full metadata map.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub code_file: Option<PathBuf>,
    pub page: Option<String>,
    pub origin: Option<String>,
    /// `None` when absent, non-numeric or zero.
    pub timeout_secs: Option<u64>,
    pub trace_file: Option<PathBuf>,
    pub metadata: Map<String, Value>,
}

impl Invocation {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let metadata = parse_flag_args(args);
        let text = |key: &str| metadata.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            code_file: text(CODE_FILE_FLAG).map(PathBuf::from),
            page: text(PAGE_FLAG),
            origin: text(ORIGIN_FLAG),
            timeout_secs: text(TIMEOUT_FLAG)
                .and_then(|raw| leading_integer(&raw))
                .filter(|secs| *secs > 0),
            trace_file: text(TRACE_FILE_FLAG).map(PathBuf::from),
            metadata,
        }
    }
}

/// Integer prefix of `raw` after leading whitespace (`"15s"` is 15).
fn leading_integer(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn valueless_flags_are_true() {
        let parsed = parse_flag_args(argv(&["--verbose", "--page", "https://a.test", "--dry"]));
        assert_eq!(parsed.get("verbose"), Some(&json!(true)));
        assert_eq!(parsed.get("page"), Some(&json!("https://a.test")));
        assert_eq!(parsed.get("dry"), Some(&json!(true)));
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, ["verbose", "page", "dry"]);
    }

    #[test]
    fn stray_tokens_are_ignored() {
        let parsed = parse_flag_args(argv(&["stray", "--label", "bad", "extra"]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("label"), Some(&json!("bad")));
    }

    #[test]
    fn timeout_fallbacks() {
        let inv = Invocation::from_args(argv(&["--timeout", "0"]));
        assert_eq!(inv.timeout_secs, None);
        let inv = Invocation::from_args(argv(&["--timeout", "soon"]));
        assert_eq!(inv.timeout_secs, None);
        let inv = Invocation::from_args(argv(&["--timeout", "15s"]));
        assert_eq!(inv.timeout_secs, Some(15));
        let inv = Invocation::from_args(argv(&["--timeout"]));
        assert_eq!(inv.timeout_secs, None);
    }

    #[test]
    fn code_file_without_value_is_absent() {
        let inv = Invocation::from_args(argv(&["--code-file", "--page", "https://a.test"]));
        assert!(inv.code_file.is_none());
        assert_eq!(inv.metadata.get("code-file"), Some(&json!(true)));
    }
}
