// logscrub/src/main.rs
//! Logscrub entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the subcommand.

use anyhow::Result;
use clap::Parser;

use logscrub::cli::{Cli, Commands};
use logscrub::commands::{scan, scrub};
use logscrub::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    log::info!("logscrub started. Version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Scrub(cmd) => scrub::run(&cmd, args.quiet),
        Commands::Scan(cmd) => scan::run(&cmd, args.quiet),
    }
}
