//! Pattern catalog management for `logscrub-core`.
//!
//! This module defines the core data structures for line patterns and the
//! catalog that groups them. It handles serialization/deserialization of YAML
//! catalogs and provides utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info, warn};
use regex::Regex;

use crate::errors::ScrubError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single line pattern used by the scrub engine.
///
/// The pattern is matched against each input line; every capture group marks
/// a value to collect for redaction, so a pattern must carry at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LinePattern {
    /// Unique identifier for the pattern (e.g., "machine_id").
    pub name: String,
    /// Human-readable description of what the pattern targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// If true, the pattern is skipped unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the pattern.
    pub enabled: Option<bool>,
}

/// Represents the top-level pattern catalog for Logscrub.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Catalog {
    /// The line patterns, in application order.
    pub patterns: Vec<LinePattern>,
}

impl Catalog {
    /// Loads the built-in game-client patterns from the embedded catalog.
    pub fn built_in() -> Result<Self> {
        debug!("Loading built-in patterns from embedded string...");
        let default_yaml = include_str!("../config/default_patterns.yaml");
        let catalog: Catalog = serde_yml::from_str(default_yaml)
            .context("Failed to parse built-in pattern catalog")?;

        debug!("Loaded {} built-in patterns.", catalog.patterns.len());
        Ok(catalog)
    }

    /// Loads a pattern catalog from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom patterns from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        validate_patterns(&catalog.patterns)?;
        info!("Loaded {} patterns from file {}.", catalog.patterns.len(), path.display());

        Ok(catalog)
    }

    /// Filters active patterns based on enable/disable lists provided via CLI.
    pub fn set_active_patterns(&mut self, enable: &[String], disable: &[String]) {
        let enable_set: HashSet<&str> = enable.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable.iter().map(String::as_str).collect();

        debug!("Initial pattern count before filtering: {}", self.patterns.len());

        let all_pattern_names: HashSet<&str> =
            self.patterns.iter().map(|p| p.name.as_str()).collect();

        for name in enable_set.difference(&all_pattern_names) {
            warn!("Pattern '{}' in `enable` list does not exist.", name);
        }

        for name in disable_set.difference(&all_pattern_names) {
            warn!("Pattern '{}' in `disable` list does not exist.", name);
        }

        self.patterns.retain(|pattern| {
            let name = pattern.name.as_str();
            !disable_set.contains(name) && (!pattern.opt_in || enable_set.contains(name))
        });

        debug!("Final active pattern count after filtering: {}", self.patterns.len());
    }
}

/// Merges a user-defined catalog over the built-in one.
///
/// A user pattern with the same name replaces the built-in entry in place;
/// remaining user patterns are appended after the built-in ones. Catalog
/// order is preserved so summaries and scan reports stay stable across runs.
pub fn merge_catalogs(default_catalog: Catalog, user_catalog: Option<Catalog>) -> Catalog {
    debug!(
        "merge_catalogs called. Initial default pattern count: {}",
        default_catalog.patterns.len()
    );

    let mut final_patterns = default_catalog.patterns;

    if let Some(user) = user_catalog {
        debug!("User catalog provided. Merging {} user patterns.", user.patterns.len());
        for user_pattern in user.patterns {
            match final_patterns.iter_mut().find(|p| p.name == user_pattern.name) {
                Some(existing) => *existing = user_pattern,
                None => final_patterns.push(user_pattern),
            }
        }
    }

    debug!("Final total patterns after merge: {}", final_patterns.len());

    Catalog { patterns: final_patterns }
}

/// Validates pattern integrity (names, regex compilation, capture groups).
pub fn validate_patterns(patterns: &[LinePattern]) -> Result<(), ScrubError> {
    let mut pattern_names = HashSet::new();
    let mut errors = Vec::new();

    for pattern in patterns {
        if pattern.name.is_empty() {
            errors.push("A pattern has an empty `name` field.".to_string());
        } else if !pattern_names.insert(pattern.name.clone()) {
            errors.push(format!("Duplicate pattern name found: '{}'.", pattern.name));
        }

        if pattern.pattern.is_empty() {
            errors.push(format!("Pattern '{}' has an empty `pattern` field.", pattern.name));
            continue;
        }

        if pattern.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Pattern '{}': length ({}) exceeds maximum allowed ({}).",
                pattern.name,
                pattern.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        match Regex::new(&pattern.pattern) {
            Ok(re) => {
                // captures_len counts the implicit whole-match group 0.
                if re.captures_len() < 2 {
                    errors.push(format!("Pattern '{}' has no capture group.", pattern.name));
                }
            }
            Err(e) => {
                errors.push(format!(
                    "Pattern '{}' has an invalid regex pattern: {}",
                    pattern.name, e
                ));
            }
        }
    }

    if !errors.is_empty() {
        Err(ScrubError::InvalidCatalog(errors.join("\n")))
    } else {
        Ok(())
    }
}
