//! Command-line interface definitions for sidediff.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes,
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::config::ColorChoice;
use crate::render::OutputFormat;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for sidediff.
#[derive(Parser)]
#[command(
    name = "sidediff",
    version = crate::VERSION,
    about = "Side-by-side line diff of two text files",
    long_about = "Compares two text files line by line and shows kept, removed and added lines \
                  side by side in the terminal, as a standalone HTML page, or as JSON"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file to use
    #[arg(long, global = true, env = "SIDEDIFF_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to use colors (overrides the config file)
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare two text files
    Compare(CompareArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of the compare command.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Original file (left column)
    pub left: PathBuf,

    /// Changed file (right column)
    pub right: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout
    /// (html defaults to the configured output file)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Label shown for the left file (default: its file name)
    #[arg(long, value_name = "LABEL")]
    pub left_label: Option<String>,

    /// Label shown for the right file (default: its file name)
    #[arg(long, value_name = "LABEL")]
    pub right_label: Option<String>,

    /// Title of the HTML report (must not be empty)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub title: Option<String>,

    /// Exit with status 1 when the files differ
    #[arg(long)]
    pub exit_code: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "sidediff", "compare", "a.txt", "b.txt", "--format", "html", "-o", "out.html",
        ])?;

        let Commands::Compare(args) = cli.command else {
            anyhow::bail!("expected compare command");
        };
        assert_eq!(args.left, PathBuf::from("a.txt"));
        assert_eq!(args.format, OutputFormat::Html);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(!args.exit_code);
        Ok(())
    }

    #[test]
    fn test_empty_title_rejected() {
        let result =
            Cli::try_parse_from(["sidediff", "compare", "a.txt", "b.txt", "--title", ""]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "sidediff", "compare", "a.txt", "b.txt", "--title", "Release diff",
        ]);
        assert!(matches!(
            cli.map(|cli| cli.command),
            Ok(Commands::Compare(CompareArgs { title: Some(ref t), .. })) if t == "Release diff"
        ));
    }

    #[test]
    fn test_compare_requires_two_files() {
        assert!(Cli::try_parse_from(["sidediff", "compare", "a.txt"]).is_err());
    }
}
