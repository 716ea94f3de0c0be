//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// vjsgen - Generate and regenerate video.js plugin package manifests
#[derive(Parser, Debug)]
#[command(name = "vjsgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if vjsgen was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(
        long = "interactive",
        global = true,
        conflicts_with = "no_interactive"
    )]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate or regenerate the project's package.json
    #[command(
        name = "generate",
        long_about = "Generate or regenerate the project's package.json.\n\n\
            Composes the baseline manifest for a video.js plugin, applies the \
            selected optional features, merges in your existing package.json so \
            hand-edited entries survive, and writes the result in a canonical, \
            diff-friendly key order. Running it again over its own output \
            changes nothing.\n\n\
            Options not given on the command line fall back to the saved \
            options in .vjsgenrc.toml, then to the global config, then to the \
            built-in defaults.",
        after_help = "\
WORKFLOW EXAMPLES:
    # First run: answer the prompts, get a package.json
    vjsgen generate

    # Non-interactive, with documentation tooling
    vjsgen generate --name hls-quality --docs --no-interactive

    # Preview without touching disk
    vjsgen generate --dry-run

    # Regenerate after upgrading vjsgen (reuses saved options)
    vjsgen generate"
    )]
    Generate {
        /// Plugin name, with or without the videojs- prefix
        #[arg(long)]
        name: Option<String>,

        /// Plugin version
        #[arg(long)]
        version: Option<String>,

        /// Plugin description
        #[arg(long)]
        description: Option<String>,

        /// Plugin author
        #[arg(long)]
        author: Option<String>,

        /// License identifier (e.g. MIT, Apache-2.0)
        #[arg(long)]
        license: Option<String>,

        /// Include documentation tooling (jsdoc, doctoc)
        #[arg(long, conflicts_with = "no_docs")]
        docs: bool,
        /// Exclude documentation tooling
        #[arg(long)]
        no_docs: bool,

        /// Include the stylesheet build pipeline (postcss)
        #[arg(long, conflicts_with = "no_css")]
        css: bool,
        /// Exclude the stylesheet build pipeline
        #[arg(long)]
        no_css: bool,

        /// Include localization tooling
        #[arg(long, conflicts_with = "no_lang")]
        lang: bool,
        /// Exclude localization tooling
        #[arg(long)]
        no_lang: bool,

        /// Include the pre-commit hook and staged-file filter
        #[arg(long, conflicts_with = "no_precommit")]
        precommit: bool,
        /// Exclude the pre-commit hook
        #[arg(long)]
        no_precommit: bool,

        /// Include the pre-push hook
        #[arg(long, conflicts_with = "no_prepush")]
        prepush: bool,
        /// Exclude the pre-push hook
        #[arg(long)]
        no_prepush: bool,

        /// Print the manifest instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Skip saving the options to .vjsgenrc.toml
        #[arg(long)]
        no_save: bool,
    },

    /// Show the dependency versions this tool pins
    #[command(
        name = "versions",
        long_about = "Show the dependency versions this tool pins.\n\n\
            Every dependency vjsgen writes into a generated package.json is \
            resolved through the version table packaged with the tool. This \
            command prints that table."
    )]
    Versions,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for vjsgen \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    vjsgen completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    vjsgen completion zsh >> ~/.zshrc

    # Fish
    vjsgen completion fish > ~/.config/fish/completions/vjsgen.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve a paired `--flag` / `--no-flag` into a tri-state.
pub fn flag_override(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flag_override_tristate() {
        assert_eq!(flag_override(true, false), Some(true));
        assert_eq!(flag_override(false, true), Some(false));
        assert_eq!(flag_override(false, false), None);
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "vjsgen",
            "generate",
            "--name",
            "wombat",
            "--docs",
            "--no-precommit",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Command::Generate {
                name,
                docs,
                no_precommit,
                dry_run,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("wombat"));
                assert!(docs);
                assert!(no_precommit);
                assert!(dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn conflicting_flags_rejected() {
        assert!(Cli::try_parse_from(["vjsgen", "generate", "--docs", "--no-docs"]).is_err());
    }
}
