// logscrub/src/commands/mod.rs
//! Command handlers for the `logscrub` CLI.

pub mod scan;
pub mod scrub;
