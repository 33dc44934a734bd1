//! Command to validate a provisos file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use provisos::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a provisos file without checking any paths.
#[derive(Args)]
pub struct ValidateCommand {
    /// Provisos file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.file.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.file.display()
            )));
        }

        let file = match ConfigLoader::load_file(&self.file) {
            Ok(f) => f,
            Err(e) => {
                global.logger.error(&format!("Parse error: {e}"));
                return Err(CliError::SemanticFailure(
                    "Provisos file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&file) {
            Ok(()) => {
                for entry in file
                    .provisos
                    .iter()
                    .filter(|e| ConfigValidator::has_unreachable_checks(e))
                {
                    global.logger.warn(&format!(
                        "{}: checks are never run when the path must not exist",
                        entry.path.display()
                    ));
                }
                if !global.quiet {
                    println!("Provisos file is valid");
                }
                Ok(())
            }
            Err(e) => {
                global.logger.error(&format!("Validation error: {e}"));
                Err(CliError::SemanticFailure(
                    "Provisos file validation failed".to_string(),
                ))
            }
        }
    }
}
