// logscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the logscrub application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "logscrub",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Anonymize game-client log files before sharing them",
    long_about = "Logscrub removes personally identifying values from game-client log files. It scans every line against a catalog of known log-line shapes, collects the values those lines leak (account names, hardware identifiers, file system paths and similar), and replaces each collected value everywhere it appears in the file. The original file is never modified; the cleaned copy is written alongside it.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages and the summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `logscrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymizes log files, writing a cleaned copy next to each input.
    #[command(about = "Anonymizes log files, writing a cleaned copy next to each input.")]
    Scrub(ScrubCommand),

    /// Scans log files and reports what would be redacted, without writing anything.
    #[command(about = "Scans log files and reports what would be redacted, without writing anything.")]
    Scan(ScanCommand),
}

/// Arguments for the `scrub` command.
#[derive(Parser, Debug)]
pub struct ScrubCommand {
    /// Log files to anonymize.
    #[arg(value_name = "FILE", required = true, help = "One or more log files to anonymize.")]
    pub files: Vec<PathBuf>,

    /// Path to a custom pattern catalog (YAML), merged over the built-in one.
    #[arg(long = "rules", value_name = "FILE", help = "Path to a custom pattern catalog (YAML), merged over the built-in one.")]
    pub rules: Option<PathBuf>,

    /// Replacement marker written over captured values.
    #[arg(long = "sentinel", value_name = "STRING", help = "Replacement marker written over captured values (defaults to *ANONYMIZED*).")]
    pub sentinel: Option<String>,

    /// Explicitly enable these pattern names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these pattern names, including opt-in ones (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these pattern names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these pattern names (comma-separated).")]
    pub disable: Vec<String>,

    /// Suppress the redaction summary.
    #[arg(long = "no-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Log files to scan.
    #[arg(value_name = "FILE", required = true, help = "One or more log files to scan.")]
    pub files: Vec<PathBuf>,

    /// Path to a custom pattern catalog (YAML), merged over the built-in one.
    #[arg(long = "rules", value_name = "FILE", help = "Path to a custom pattern catalog (YAML), merged over the built-in one.")]
    pub rules: Option<PathBuf>,

    /// Explicitly enable these pattern names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these pattern names, including opt-in ones (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these pattern names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these pattern names (comma-separated).")]
    pub disable: Vec<String>,

    /// Print the scan report as JSON to stdout.
    #[arg(long = "json", help = "Print the scan report as JSON to stdout, including the captured values.")]
    pub json: bool,
}
