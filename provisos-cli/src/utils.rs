//! Utility types shared across CLI commands.
//!
//! This module holds the global options passed to every command and the
//! flag set that builds a [`Proviso`] from the command line.

use clap::Args;
use provisos::check::{self, parse_mode};
use provisos::{Existence, Logger, Preset, Proviso};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Logger configured from the flags and environment.
    pub logger: Logger,
}

/// Flags describing a proviso.
///
/// Without an existence flag or a preset the path must exist.
#[derive(Args, Debug, Clone, Default)]
pub struct ProvisoArgs {
    /// Start from a named preset (dir-exists, file-exists, file-non-empty, is-new)
    #[arg(long, value_parser = Preset::parse)]
    pub preset: Option<Preset>,

    /// The path must exist
    #[arg(long, conflicts_with_all = ["must_not_exist", "optional"])]
    pub must_exist: bool,

    /// The path must not exist
    #[arg(long, conflicts_with = "optional")]
    pub must_not_exist: bool,

    /// The path may be absent; checks apply only if it exists
    #[arg(long)]
    pub optional: bool,

    /// Inspect symbolic links themselves instead of their targets
    #[arg(long)]
    pub no_follow: bool,

    /// Must be a directory
    #[arg(long, conflicts_with_all = ["file", "symlink"])]
    pub dir: bool,

    /// Must be a regular file
    #[arg(long, conflicts_with = "symlink")]
    pub file: bool,

    /// Must be a symbolic link (implies --no-follow)
    #[arg(long)]
    pub symlink: bool,

    /// Size must be greater than zero
    #[arg(long)]
    pub non_empty: bool,

    /// Size must be greater than N bytes
    #[arg(long, value_name = "N")]
    pub size_gt: Option<u64>,

    /// Size must be less than N bytes
    #[arg(long, value_name = "N")]
    pub size_lt: Option<u64>,

    /// Size must equal N bytes
    #[arg(long, value_name = "N")]
    pub size_eq: Option<u64>,

    /// Permission bits must equal MODE (octal, e.g. 0600)
    #[arg(long, value_name = "MODE", value_parser = parse_mode_arg)]
    pub perm: Option<u32>,

    /// Must have been modified within the last SECS seconds
    #[arg(long, value_name = "SECS")]
    pub modified_within: Option<u32>,
}

impl ProvisoArgs {
    /// The existence requirement the flags select, if any.
    fn existence(&self) -> Option<Existence> {
        if self.must_exist {
            Some(Existence::MustExist)
        } else if self.must_not_exist {
            Some(Existence::MustNotExist)
        } else if self.optional {
            Some(Existence::Optional)
        } else {
            None
        }
    }

    /// Build the proviso.
    ///
    /// The preset (if any) supplies the starting point. Explicit existence
    /// flags override it and check flags are appended in a fixed order:
    /// type, size, permissions, modification time.
    pub fn to_proviso(&self) -> Proviso {
        let seed = self.preset.map(Preset::to_proviso);
        let existence = self
            .existence()
            .or_else(|| seed.as_ref().map(Proviso::existence))
            .unwrap_or(Existence::MustExist);

        let mut proviso = Proviso::new(existence);
        if let Some(seed) = &seed {
            proviso = proviso.with_checks(seed.checks().iter().cloned());
        }

        if self.dir {
            proviso = proviso.with_check(check::is_dir());
        }
        if self.file {
            proviso = proviso.with_check(check::is_regular());
        }
        if self.symlink {
            proviso = proviso.with_check(check::is_symlink());
        }
        if self.non_empty {
            proviso = proviso.with_check(check::size_gt(0));
        }
        if let Some(n) = self.size_gt {
            proviso = proviso.with_check(check::size_gt(n));
        }
        if let Some(n) = self.size_lt {
            proviso = proviso.with_check(check::size_lt(n));
        }
        if let Some(n) = self.size_eq {
            proviso = proviso.with_check(check::size_eq(n));
        }
        if let Some(mode) = self.perm {
            proviso = proviso.with_check(check::perm_eq(mode));
        }
        if let Some(secs) = self.modified_within {
            let window = chrono::Duration::seconds(i64::from(secs));
            proviso = proviso.with_check(check::modified_within(window));
        }

        proviso.follow_symlinks(!(self.no_follow || self.symlink))
    }
}

/// Parse an octal permission mode for clap.
fn parse_mode_arg(s: &str) -> Result<u32, String> {
    parse_mode(s).map_err(|e| e.to_string())
}
