// logscrub/src/commands/scrub.rs
//! Implements the `scrub` command: anonymize log files in place-adjacent
//! fashion, writing a cleaned copy next to each input.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use logscrub_core::catalog::{merge_catalogs, Catalog};
use logscrub_core::engine::{ScrubEngine, DEFAULT_SENTINEL};

use crate::cli::ScrubCommand;
use crate::ui;

/// Suffix appended to an input path to name its cleaned copy.
pub const CLEANED_SUFFIX: &str = ".cleaned.log";

/// Builds a [`ScrubEngine`] from the built-in catalog, an optional user
/// catalog, and the enable/disable selections.
pub(crate) fn build_engine(
    rules: Option<&Path>,
    enable: &[String],
    disable: &[String],
    sentinel: Option<&str>,
) -> Result<ScrubEngine> {
    let default_catalog = Catalog::built_in()?;
    let user_catalog = match rules {
        Some(path) => Some(Catalog::load_from_file(path)?),
        None => None,
    };
    let mut catalog = merge_catalogs(default_catalog, user_catalog);
    catalog.set_active_patterns(enable, disable);
    ScrubEngine::with_sentinel(catalog, sentinel.unwrap_or(DEFAULT_SENTINEL))
}

/// Returns the path the cleaned copy of `path` is written to.
pub fn cleaned_path(path: &Path) -> PathBuf {
    let mut out = OsString::from(path.as_os_str());
    out.push(CLEANED_SUFFIX);
    PathBuf::from(out)
}

/// Runs the `scrub` command over every file it was given.
///
/// Files are processed independently: a failure in one is reported and
/// the rest still run. Any failure makes the command exit non-zero.
pub fn run(cmd: &ScrubCommand, quiet: bool) -> Result<()> {
    info!("Starting scrub operation.");

    let engine = build_engine(
        cmd.rules.as_deref(),
        &cmd.enable,
        &cmd.disable,
        cmd.sentinel.as_deref(),
    )?;

    let mut failures = 0usize;
    for path in &cmd.files {
        if let Err(e) = scrub_file(&engine, path, cmd, quiet) {
            ui::error_msg(format!("{}: {:#}", path.display(), e));
            failures += 1;
        }
    }

    info!("Scrub operation completed.");
    if failures > 0 {
        return Err(anyhow!("{} of {} file(s) failed", failures, cmd.files.len()));
    }
    Ok(())
}

fn scrub_file(engine: &ScrubEngine, path: &Path, cmd: &ScrubCommand, quiet: bool) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    let outcome = engine.scrub(&content)?;
    debug!(
        "Scrubbed {}: {} bytes in, {} bytes out.",
        path.display(),
        content.len(),
        outcome.cleaned.len()
    );

    let out_path = cleaned_path(path);
    fs::write(&out_path, &outcome.cleaned)
        .with_context(|| format!("Failed to write output file {}", out_path.display()))?;

    if !quiet {
        ui::info_msg(format!("Wrote cleaned log to {}", out_path.display()));
    }
    if !cmd.no_summary && !quiet {
        ui::print_summary(&outcome.summary);
    }
    Ok(())
}
