// logscrub-core/src/lib.rs
//! # Logscrub Core Library
//!
//! `logscrub-core` provides the fundamental, platform-independent logic for
//! anonymizing game-client log files. It defines the pattern catalog that
//! describes which log lines carry personal or hardware-identifying values,
//! compiles that catalog into efficient matchers, and implements the
//! two-stage extract/redact engine that removes the captured values.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on the catalog, without concerns for
//! I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `catalog`: Defines `LinePattern`s and the `Catalog` for specifying sensitive line shapes.
//! * `compiler`: Compiles a catalog into ready-to-run regular expressions.
//! * `engine`: The `ScrubEngine` implementing extraction, redaction, and summaries.
//! * `errors`: The `ScrubError` enum for programmatic error handling.
//! * `pii`: Helpers that keep captured values out of this library's own logs.
//!
//! ## Public API
//!
//! **Catalog & Patterns**
//!
//! * [`Catalog`]: Manages collections of `LinePattern`s, including loading, merging, and filtering.
//! * [`LinePattern`]: Defines a single line shape and the capture groups to collect from it.
//! * [`merge_catalogs`]: Merges a user-defined catalog over the built-in one.
//! * [`Catalog::built_in`]: Loads the embedded game-client pattern catalog.
//! * [`Catalog::load_from_file`]: Loads a catalog from a YAML file.
//!
//! **Scrub Engine**
//!
//! * [`ScrubEngine`]: Extracts captured values and substitutes the sentinel globally.
//! * [`ScrubOutcome`]: The cleaned text plus the per-pattern summary.
//! * [`scrub_string`]: A convenience function for a full, one-shot scrub.
//!
//! ## Usage Example
//!
//! ```rust
//! use logscrub_core::{Catalog, ScrubEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in pattern catalog.
//!     let catalog = Catalog::built_in()?;
//!
//!     // 2. Prepare some log content to scrub.
//!     let input = "LogInit: MachineId=ABCD1234\nLogInit: Display: core count 8";
//!
//!     // 3. Build the engine and run the scrub.
//!     let engine = ScrubEngine::new(catalog)?;
//!     let outcome = engine.scrub(input)?;
//!
//!     assert_eq!(outcome.cleaned.lines().next(), Some("LogInit: MachineId=*ANONYMIZED*"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible catalog loading uses `anyhow::Error` with context; the engine
//! itself reports failures through the typed [`ScrubError`] enum, of which
//! [`ScrubError::BlankLog`] (empty input) is the one callers most often
//! need to tell apart.
//!
//! ## Design Principles
//!
//! * **Collect then substitute:** captured values are redacted everywhere in
//!   the text, not only where a pattern matched them.
//! * **Deterministic:** identical input and catalog always produce identical
//!   output, independent of hash iteration order.
//! * **Stateless:** the core library does not maintain application state.
//! * **Testable:** logic is easily unit-testable in isolation.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod compiler;
pub mod engine;
pub mod errors;
pub mod pii;

/// Re-exports the public catalog types and functions for managing line patterns.
pub use catalog::{
    merge_catalogs,
    validate_patterns,
    Catalog,
    LinePattern,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports the scrub engine and its result types.
pub use engine::{
    scrub_string,
    ScrubEngine,
    ScrubOutcome,
    ScrubSummaryItem,
    DEFAULT_SENTINEL,
};

/// Re-exports the PII-safe logging helper for downstream debug output.
pub use pii::redact_for_log;

// Re-export key types from the compiler module for advanced usage.
pub use compiler::{compile_catalog, CompiledCatalog, CompiledPattern};
