//! Main entry point for the provisos CLI.
//!
//! This is the command-line interface for checking filesystem objects
//! against provisos:
//! - `check`: Check paths against a proviso given by flags
//! - `describe`: Describe the proviso given by flags
//! - `run`: Check every entry of a provisos file
//! - `validate`: Validate a provisos file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = provisos::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.debug(&format!("library diagnostics disabled: {e}"));
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        logger,
    };

    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Describe(cmd) => cmd.execute(&global),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
