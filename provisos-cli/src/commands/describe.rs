//! Command to describe a proviso in words.

use crate::error::CliError;
use crate::utils::{GlobalOptions, ProvisoArgs};
use clap::Args;
use provisos::ReportFormat;

/// Describe the proviso built from flags without touching the filesystem.
#[derive(Args)]
pub struct DescribeCommand {
    #[command(flatten)]
    pub proviso: ProvisoArgs,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,
}

impl DescribeCommand {
    /// Execute the describe command.
    ///
    /// In verbose mode the text output also lists each check on its own line.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let proviso = self.proviso.to_proviso();

        match self.format {
            ReportFormat::Text => {
                println!("{}", proviso.describe());
                if global.verbose {
                    for check in proviso.describe_checks() {
                        println!("  - {check}");
                    }
                }
            }
            ReportFormat::Json => {
                let value = serde_json::json!({
                    "description": proviso.describe(),
                    "existence": proviso.existence(),
                    "follow_symlinks": proviso.follows_symlinks(),
                    "checks": proviso.describe_checks(),
                });
                let rendered = serde_json::to_string_pretty(&value)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{rendered}");
            }
        }
        Ok(())
    }
}
