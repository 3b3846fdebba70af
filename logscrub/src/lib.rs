// logscrub/src/lib.rs
//! # Logscrub CLI
//!
//! This crate provides the command-line interface for the Logscrub engine.
//! The binary target only parses arguments and dispatches; everything it
//! calls lives here so integration tests can reach the same code paths.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
