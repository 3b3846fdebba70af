// logscrub/src/ui.rs
//! User-facing output helpers for the `logscrub` CLI.
//!
//! All human-readable reporting goes to stderr; stdout is reserved for
//! machine-readable output (`scan --json`). Captured values never appear
//! in these reports, only pattern names and occurrence counts.

use is_terminal::IsTerminal;
use logscrub_core::engine::ScrubSummaryItem;
use owo_colors::{AnsiColors, OwoColorize};
use std::io;

/// Colors `msg` when stderr is a terminal, otherwise returns it unchanged.
fn paint(msg: &str, color: AnsiColors) -> String {
    if io::stderr().is_terminal() {
        msg.color(color).to_string()
    } else {
        msg.to_string()
    }
}

/// Prints an informational message to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    eprintln!("{}", paint(msg.as_ref(), AnsiColors::Cyan));
}

/// Prints a warning message to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    eprintln!("{}", paint(msg.as_ref(), AnsiColors::Yellow));
}

/// Prints an error message to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    eprintln!("{}", paint(msg.as_ref(), AnsiColors::Red));
}

/// Prints the per-file redaction summary after a scrub.
pub fn print_summary(summary: &[ScrubSummaryItem]) {
    print_items("--- Redaction Summary ---", summary);
}

/// Prints the per-file report produced by a scan.
pub fn print_scan_summary(summary: &[ScrubSummaryItem]) {
    print_items("--- Scan Summary ---", summary);
}

fn print_items(header: &str, summary: &[ScrubSummaryItem]) {
    if summary.is_empty() {
        eprintln!("{}", paint("No redaction matches found.", AnsiColors::Green));
        return;
    }
    eprintln!("\n{}", paint(header, AnsiColors::Cyan));
    for item in summary {
        eprintln!(
            "{} ({} occurrences)",
            paint(&item.pattern_name, AnsiColors::Cyan),
            item.occurrences
        );
    }
    eprintln!();
}
