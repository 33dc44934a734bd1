//! Command to check paths against a proviso.

use crate::error::CliError;
use crate::utils::{GlobalOptions, ProvisoArgs};
use clap::Args;
use provisos::{CheckReport, FailureKind, ReportFormat};
use std::path::PathBuf;

/// Check paths against a proviso built from flags.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub proviso: ProvisoArgs,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// Every path is checked even after a failure. Passing paths are only
    /// listed in verbose mode or with JSON output.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let proviso = self.proviso.to_proviso();
        global
            .logger
            .info(&format!("checking {} path(s): {proviso}", self.paths.len()));

        let report = CheckReport::run(self.paths.iter().map(|p| (p, proviso.clone())));

        match self.format {
            ReportFormat::Json => println!("{}", report.render_json()?),
            ReportFormat::Text => {
                for outcome in &report.outcomes {
                    match (&outcome.message, outcome.kind) {
                        // Predicate messages do not name the path.
                        (Some(message), Some(FailureKind::CheckFailed)) if !global.quiet => {
                            eprintln!("path {}: {message}", outcome.path.display());
                        }
                        (Some(message), _) if !global.quiet => eprintln!("{message}"),
                        (None, _) if global.verbose => {
                            println!("ok   {}", outcome.path.display());
                        }
                        _ => {}
                    }
                }
            }
        }

        let failed = report.failures().count();
        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} path(s) failed",
                report.outcomes.len()
            )));
        }
        Ok(())
    }
}
