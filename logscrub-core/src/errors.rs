//! errors.rs - Custom error types for the logscrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `logscrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompile(String, regex::Error),

    #[error("Pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Pattern '{0}' has no capture group")]
    MissingCaptureGroup(String),

    #[error("Invalid pattern catalog: {0}")]
    InvalidCatalog(String),

    #[error("Blank log file")]
    BlankLog,
}
