//! Shared constants for the scriptlens pipeline.

/// Page URL assumed when the caller does not supply one.
pub const DEFAULT_PAGE_URL: &str = "https://example.com";

/// Wall-clock budget for one sandboxed run, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User agent the sandbox reports to the script.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Cookie jar contents the sandbox reports to the script.
pub const DEFAULT_COOKIE: &str = "";

/// Number of ranked call paths emitted per record.
pub const TOP_CALLS: usize = 3;
