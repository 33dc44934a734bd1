//! Command to check every entry of a provisos file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use provisos::config::{ConfigLoader, ConfigValidator, PROVISOS_FILE_NAME};
use provisos::{CheckReport, ReportFormat};
use std::env;
use std::path::{Path, PathBuf};

/// Check every entry of a provisos file.
#[derive(Args)]
pub struct RunCommand {
    /// Provisos file (default: nearest provisos.yaml from the current directory up)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,
}

impl RunCommand {
    /// Execute the run command.
    ///
    /// Relative entry paths are resolved against the directory holding the
    /// provisos file, so the verdict does not depend on where it is run from.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match self.file {
            Some(path) => path,
            None => ConfigLoader::discover(&env::current_dir()?).ok_or_else(|| {
                CliError::Config(format!(
                    "no {PROVISOS_FILE_NAME} found in the current directory or its parents"
                ))
            })?,
        };
        global
            .logger
            .info(&format!("loading provisos from {}", path.display()));

        let file = ConfigLoader::load_file(&path)?;
        ConfigValidator::validate(&file)?;

        // Relative entries are relative to the file, not the working directory.
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let mut entries = Vec::with_capacity(file.provisos.len());
        for entry in &file.provisos {
            if ConfigValidator::has_unreachable_checks(entry) {
                global.logger.warn(&format!(
                    "{}: checks are never run when the path must not exist",
                    entry.path.display()
                ));
            }
            entries.push((entry.resolved_path_from(base)?, entry.to_proviso()?));
        }

        let report = CheckReport::run(entries);
        let rendered = report.render(self.format)?;
        if !(global.quiet && self.format == ReportFormat::Text) {
            println!("{rendered}");
        }

        let failed = report.failures().count();
        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} proviso(s) failed",
                report.outcomes.len()
            )));
        }
        Ok(())
    }
}
