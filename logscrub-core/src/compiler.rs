//! compiler.rs - Compilation of the pattern catalog.
//!
//! This module converts a `Catalog` into a `CompiledCatalog` whose regular
//! expressions are ready for per-line matching. Compilation failures are
//! collected so a broken catalog reports every bad pattern at once instead
//! of failing on the first.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::catalog::{Catalog, MAX_PATTERN_LENGTH};
use crate::errors::ScrubError;

/// Represents a single compiled line pattern.
///
/// This struct holds a compiled regular expression along with its pattern
/// name, ready for efficient application to input lines.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The unique name of the line pattern.
    pub name: String,
}

/// Represents the collection of all compiled patterns for a scrub run.
#[derive(Debug)]
pub struct CompiledCatalog {
    /// A vector of `CompiledPattern` instances ready for application.
    pub patterns: Vec<CompiledPattern>,
}

/// Compiles a `Catalog` into a `CompiledCatalog` for efficient matching.
///
/// Patterns with empty pattern text are skipped with a warning. Every other
/// failure (bad regex, oversize pattern, missing capture group) is fatal.
pub fn compile_catalog(catalog: &Catalog) -> Result<CompiledCatalog, ScrubError> {
    debug!("Starting compilation of {} patterns.", catalog.patterns.len());

    let mut compiled_patterns = Vec::new();
    let mut compilation_errors = Vec::new();

    for pattern in &catalog.patterns {
        if pattern.pattern.is_empty() {
            warn!("Skipping pattern '{}' because its pattern text is empty.", &pattern.name);
            continue;
        }

        debug!(
            "Attempting to compile pattern: '{}' with '{:?}'",
            &pattern.name, &pattern.pattern
        );

        if pattern.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(ScrubError::PatternLengthExceeded(
                pattern.name.clone(),
                pattern.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&pattern.pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                // Group 0 is the implicit whole-match group; a usable pattern
                // needs at least one explicit capture group on top of it.
                if regex.captures_len() < 2 {
                    compilation_errors.push(ScrubError::MissingCaptureGroup(pattern.name.clone()));
                    continue;
                }
                log::debug!(
                    target: "logscrub_core::compiler",
                    "Pattern '{}' compiled successfully.",
                    &pattern.name
                );
                compiled_patterns.push(CompiledPattern {
                    regex,
                    name: pattern.name.clone(),
                });
            }
            Err(e) => {
                compilation_errors.push(ScrubError::PatternCompile(pattern.name.clone(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(ScrubError::InvalidCatalog(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling patterns. Total compiled: {}.",
            compiled_patterns.len()
        );
        Ok(CompiledCatalog { patterns: compiled_patterns })
    }
}
