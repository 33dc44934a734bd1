//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Check paths against a proviso given by flags
//! - `describe`: Describe the proviso given by flags
//! - `run`: Check every entry of a provisos file
//! - `validate`: Validate a provisos file
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod describe;
pub mod run;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use describe::DescribeCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
