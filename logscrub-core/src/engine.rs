// logscrub-core/src/engine.rs
//! The two-stage extract/redact engine for game-client logs.
//!
//! Scrubbing is collect-then-substitute. Every input line is checked against
//! the compiled catalog and all captured values are pooled into one
//! deduplicated set; each pooled value is then replaced with the sentinel
//! everywhere it appears in the text, not only on the line that matched it.
//! A hostname captured once on an init line is therefore also scrubbed from
//! crash dumps, file paths, and any other line that mentions it.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, HashSet};
use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

use crate::catalog::{Catalog, LinePattern};
use crate::compiler::{compile_catalog, CompiledCatalog};
use crate::errors::ScrubError;
use crate::pii;

/// The replacement marker written over every captured value.
pub const DEFAULT_SENTINEL: &str = "*ANONYMIZED*";

/// The distinct values one pattern captured across the whole input.
#[derive(Debug)]
struct PatternCaptures {
    name: String,
    values: Vec<String>,
}

/// Represents a single item in the scrub summary for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrubSummaryItem {
    pub pattern_name: String,
    /// Occurrences of this pattern's values in the input, counted before
    /// redaction so `scrub` and `analyze` report the same numbers.
    pub occurrences: usize,
    /// The distinct captured values, in first-seen order.
    pub values: Vec<String>,
}

/// The result of a full scrub: the cleaned text plus the per-pattern summary.
#[derive(Debug)]
pub struct ScrubOutcome {
    pub cleaned: String,
    pub summary: Vec<ScrubSummaryItem>,
}

/// The scrub engine: an active catalog, its compiled form, and the sentinel.
#[derive(Debug)]
pub struct ScrubEngine {
    catalog: Catalog,
    compiled: CompiledCatalog,
    sentinel: String,
}

impl ScrubEngine {
    /// Builds an engine with the default sentinel.
    pub fn new(catalog: Catalog) -> Result<Self> {
        Self::with_sentinel(catalog, DEFAULT_SENTINEL)
    }

    /// Builds an engine that writes `sentinel` over captured values.
    pub fn with_sentinel(catalog: Catalog, sentinel: &str) -> Result<Self> {
        let compiled = compile_catalog(&catalog)
            .context("Failed to compile pattern catalog for ScrubEngine")?;

        Ok(Self {
            catalog,
            compiled,
            sentinel: sentinel.to_string(),
        })
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scans every line against every active pattern and pools the captures.
    ///
    /// Values are deduplicated per pattern but kept in first-seen order.
    /// Empty captures are dropped; only patterns that captured something are
    /// returned.
    fn collect_captures(&self, content: &str) -> Vec<PatternCaptures> {
        let entries: HashMap<&str, &LinePattern> = self
            .catalog
            .patterns
            .iter()
            .map(|pattern| (pattern.name.as_str(), pattern))
            .collect();

        let mut collected = Vec::new();

        for compiled in &self.compiled.patterns {
            if let Some(entry) = entries.get(compiled.name.as_str()) {
                if let Some(false) = entry.enabled {
                    continue;
                }

                let mut seen: HashSet<&str> = HashSet::new();
                let mut values: Vec<String> = Vec::new();

                for line in content.lines() {
                    if let Some(caps) = compiled.regex.captures(line) {
                        for group in caps.iter().skip(1).flatten() {
                            let value = group.as_str();
                            if value.is_empty() {
                                continue;
                            }
                            if seen.insert(value) {
                                debug!(
                                    "Pattern '{}' captured: '{}'",
                                    &compiled.name,
                                    pii::loggable_value(value)
                                );
                                values.push(value.to_string());
                            }
                        }
                    }
                }

                if !values.is_empty() {
                    collected.push(PatternCaptures {
                        name: compiled.name.clone(),
                        values,
                    });
                }
            }
        }

        collected
    }

    /// Returns the full set of values the active catalog captures from `content`.
    pub fn extract(&self, content: &str) -> HashSet<String> {
        self.collect_captures(content)
            .into_iter()
            .flat_map(|captures| captures.values)
            .collect()
    }

    /// Replaces every occurrence of every value in `values` with the sentinel.
    ///
    /// Values are applied longest first, ties broken lexicographically. With
    /// no fixed order the output would depend on set iteration whenever one
    /// captured value is a substring of another: replacing the short value
    /// first splits the longer one and leaks its remainder.
    pub fn redact(&self, content: &str, values: &HashSet<String>) -> String {
        // An empty value must never reach `replace`; it matches between
        // every pair of characters.
        let mut ordered: Vec<&String> = values.iter().filter(|v| !v.is_empty()).collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut cleaned = content.to_string();
        for value in ordered {
            cleaned = cleaned.replace(value.as_str(), &self.sentinel);
        }
        cleaned
    }

    /// Runs the full scrub: collect captures, redact, summarize.
    ///
    /// Blank input is rejected. An empty file is not a game-client log, and
    /// an "anonymized" copy of one would only mislead.
    pub fn scrub(&self, content: &str) -> Result<ScrubOutcome, ScrubError> {
        if content.is_empty() {
            return Err(ScrubError::BlankLog);
        }

        let collected = self.collect_captures(content);
        let values: HashSet<String> = collected
            .iter()
            .flat_map(|captures| captures.values.iter().cloned())
            .collect();
        let cleaned = self.redact(content, &values);
        let summary = summarize(content, &collected);

        Ok(ScrubOutcome { cleaned, summary })
    }

    /// Scans `content` and reports what would be redacted, without redacting.
    pub fn analyze(&self, content: &str) -> Result<Vec<ScrubSummaryItem>, ScrubError> {
        if content.is_empty() {
            return Err(ScrubError::BlankLog);
        }

        Ok(summarize(content, &self.collect_captures(content)))
    }
}

/// Counts occurrences of each pattern's values in the original text.
fn summarize(content: &str, collected: &[PatternCaptures]) -> Vec<ScrubSummaryItem> {
    collected
        .iter()
        .map(|captures| ScrubSummaryItem {
            pattern_name: captures.name.clone(),
            occurrences: captures
                .values
                .iter()
                .map(|value| content.matches(value.as_str()).count())
                .sum(),
            values: captures.values.clone(),
        })
        .collect()
}

/// Scrubs a string in one shot with the built-in behavior.
/// This function is the primary entry point for non-interactive library use.
///
/// # Arguments
///
/// * `catalog` - The merged Catalog (built-in + optional user overrides).
/// * `content` - The log text to be scrubbed.
pub fn scrub_string(catalog: Catalog, content: &str) -> Result<String> {
    let engine = ScrubEngine::new(catalog)?;
    let outcome = engine.scrub(content)?;
    Ok(outcome.cleaned)
}
