//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, DescribeCommand, RunCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for checking filesystem objects against provisos.
#[derive(Parser)]
#[command(name = "provisos")]
#[command(version, about = "Check filesystem objects against declarative provisos", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check paths against a proviso
    Check(CheckCommand),

    /// Describe a proviso in words
    Describe(DescribeCommand),

    /// Check every entry of a provisos file
    Run(RunCommand),

    /// Validate a provisos file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
