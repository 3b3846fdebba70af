// logscrub/src/logger.rs
//! Logger initialization for the `logscrub` binary.
//!
//! Log output goes to stderr through `env_logger`. The default level is
//! `info`; `RUST_LOG` overrides it, and the `--debug`/`--quiet` flags
//! override both.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// `level_override` takes precedence over the `RUST_LOG` environment
/// variable; pass `None` to honor `RUST_LOG` (defaulting to `info`).
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    // No timestamps and no level padding; lines read "[LEVEL target] message".
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    // Repeated init calls (e.g. in tests) are harmless.
    let _ = builder.try_init();
}
