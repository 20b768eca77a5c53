//! Command handlers.
//!
//! Each submodule implements one subcommand; `main.rs` only parses and
//! dispatches.

pub mod download;
pub mod nodes;
pub mod token;
