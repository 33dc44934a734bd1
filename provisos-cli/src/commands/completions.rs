//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, elvish and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "provisos";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Installation hint for a shell, as comment lines.
fn install_hint(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "provisos completions bash > ~/.local/share/bash-completion/completions/provisos",
            "or in ~/.bashrc: eval \"$(provisos completions bash)\"",
        ],
        Shell::Zsh => &[
            "provisos completions zsh > ~/.zsh/completions/_provisos",
            "with ~/.zsh/completions in your $fpath",
        ],
        Shell::Fish => &["provisos completions fish > ~/.config/fish/completions/provisos.fish"],
        Shell::PowerShell => {
            &["provisos completions powershell | Out-String | Invoke-Expression"]
        }
        _ => &[],
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; the installation hint goes to stderr.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let hint = install_hint(self.shell);
        if !global.quiet && !hint.is_empty() {
            eprintln!("# To enable {} completions:", self.shell);
            for line in hint {
                eprintln!("#   {line}");
            }
            eprintln!();
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
