// logscrub/src/commands/scan.rs
//! Implements the `scan` command: report what a scrub would redact,
//! without writing any output file.

use anyhow::{anyhow, Context, Result};
use log::info;
use serde_json::json;
use std::fs;
use std::path::Path;

use logscrub_core::engine::{ScrubEngine, ScrubSummaryItem};

use crate::cli::ScanCommand;
use crate::commands::scrub::build_engine;
use crate::ui;

/// Runs the `scan` command over every file it was given.
pub fn run(cmd: &ScanCommand, quiet: bool) -> Result<()> {
    info!("Starting scan operation.");

    let engine = build_engine(cmd.rules.as_deref(), &cmd.enable, &cmd.disable, None)?;

    let mut reports = Vec::new();
    let mut failures = 0usize;
    for path in &cmd.files {
        match scan_file(&engine, path) {
            Ok(summary) => {
                if cmd.json {
                    reports.push(json!({
                        "file": path.display().to_string(),
                        "patterns": summary,
                    }));
                } else if !quiet {
                    ui::info_msg(format!("Scan report for {}", path.display()));
                    ui::print_scan_summary(&summary);
                }
            }
            Err(e) => {
                ui::error_msg(format!("{}: {:#}", path.display(), e));
                failures += 1;
            }
        }
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "files": reports }))?);
    }

    info!("Scan operation completed.");
    if failures > 0 {
        return Err(anyhow!("{} of {} file(s) failed", failures, cmd.files.len()));
    }
    Ok(())
}

fn scan_file(engine: &ScrubEngine, path: &Path) -> Result<Vec<ScrubSummaryItem>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    Ok(engine.analyze(&content)?)
}
