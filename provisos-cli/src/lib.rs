//! Library exports for provisos-cli.
//!
//! This module exports the CLI structure for use by tooling that needs the
//! command definitions, such as completion and man page generation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
