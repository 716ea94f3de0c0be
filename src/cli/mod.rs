//! cli
//!
//! Command-line interface layer for vjsgen.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Gather generation options from flags, saved config, and prompts
//! - Delegate to the merge engine and the project I/O layer
//!
//! # Architecture
//!
//! The CLI layer is thin. The merge engine never sees the filesystem or
//! the terminal; the CLI feeds it a parsed manifest plus a fully
//! resolved [`crate::core::context::GenContext`] and handles the result.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

/// Execution context derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory to operate in (defaults to the current directory)
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
    /// Interactive prompts enabled
    pub interactive: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}
