// logscrub-core/src/pii.rs
//! Keeps captured values out of this library's own log output.
//!
//! Captured values are exactly the data this library exists to remove, so
//! debug logging must never become a side channel for them. Raw values appear
//! in debug logs only when `LOGSCRUB_ALLOW_DEBUG_PII=true` is set.

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("LOGSCRUB_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Replaces a sensitive value with a length-only marker.
pub fn redact_for_log(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Returns the raw value only when the PII debug gate is open.
pub fn loggable_value(sensitive: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive.to_string()
    } else {
        redact_for_log(sensitive)
    }
}
