//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use doccheck::output::OutputMode;

/// doccheck - Keep module trees and reference docs in lockstep
#[derive(Parser, Debug)]
#[command(
    name = "doccheck",
    version,
    about = "Keep module trees and reference docs in lockstep",
    long_about = "Check that every module has a documentation page and every page has a module.\n\n\
                  Pairings map a module directory to its documentation directory.\n\
                  The markup scan forbids a deprecated cross-reference role (default :doc:)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root containing .doccheck.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a .doccheck.toml with the default pairings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Check that modules and documentation pages match
    Coverage {
        /// Pairings to check (default: all)
        pairings: Vec<String>,
    },

    /// Scan for the deprecated markup
    Markup {
        /// Read `grep -r` output from this file ('-' for stdin) instead of walking the tree
        #[arg(long, value_name = "FILE")]
        grep_output: Option<String>,
    },

    /// Run every coverage pairing and the markup scan
    Check,

    /// List configured pairings
    Pairings,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(&cli.root, force, output_mode),
        Some(Command::Coverage { pairings }) => {
            commands::coverage(&cli.root, &pairings, output_mode)
        },
        Some(Command::Markup { grep_output }) => {
            commands::markup(&cli.root, grep_output.as_deref(), output_mode)
        },
        Some(Command::Check) => commands::check(&cli.root, output_mode),
        Some(Command::Pairings) => commands::pairings(&cli.root, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": doccheck::VERSION
                    })
                );
            } else {
                println!("doccheck v{}", doccheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": doccheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("doccheck v{}", doccheck::VERSION);
                println!("\nRun 'doccheck --help' for usage");
                println!("Run 'doccheck check' to check the current project");
            }
            Ok(())
        },
    }
}
