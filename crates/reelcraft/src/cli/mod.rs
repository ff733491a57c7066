//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the reelcraft binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{load_config, render_guides, run_full, run_topics};
