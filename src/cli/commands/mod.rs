//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the merge engine or registry
//! 3. Formats and displays output
//!
//! Handlers never reach around the project I/O layer to touch files
//! directly.

mod completion;
mod generate;
mod versions;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use generate::{generate, GenerateOptions};
pub use versions::versions;

use anyhow::Result;

use super::Context;
use crate::cli::args::{flag_override, Command};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Generate {
            name,
            version,
            description,
            author,
            license,
            docs,
            no_docs,
            css,
            no_css,
            lang,
            no_lang,
            precommit,
            no_precommit,
            prepush,
            no_prepush,
            dry_run,
            no_save,
        } => {
            let options = GenerateOptions {
                name,
                version,
                description,
                author,
                license,
                docs: flag_override(docs, no_docs),
                css: flag_override(css, no_css),
                lang: flag_override(lang, no_lang),
                precommit: flag_override(precommit, no_precommit),
                prepush: flag_override(prepush, no_prepush),
                dry_run,
                save: !no_save,
            };
            generate(ctx, &options)
        }
        Command::Versions => versions(),
        Command::Completion { shell } => completion(shell),
    }
}
