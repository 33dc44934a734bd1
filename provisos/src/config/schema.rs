//! Provisos file schema definitions.
//!
//! A provisos file lists the paths a host application cares about and what
//! each must satisfy:
//!
//! ```yaml
//! provisos:
//!   - path: ~/.config/app/config.yaml
//!     preset: file_non_empty
//!     checks:
//!       - perm_eq: "0600"
//!   - path: /var/run/app.lock
//!     existence: must_not_exist
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::check::{self, parse_mode, MetadataCheck};
use crate::config::paths::expand_tilde;
use crate::error::{Error, Result};
use crate::existence::Existence;
use crate::preset::Preset;
use crate::proviso::Proviso;

/// A complete provisos file.
///
/// # Examples
///
/// ```
/// use provisos::config::ProvisosFile;
///
/// let file: ProvisosFile = serde_yaml::from_str(
///     "provisos:\n  - path: /tmp\n    preset: dir_exists\n",
/// ).unwrap();
/// assert_eq!(file.provisos.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProvisosFile {
    /// The entries, checked in order.
    #[serde(default)]
    pub provisos: Vec<ProvisoEntry>,
}

/// One path and the proviso it must satisfy.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProvisoEntry {
    /// The path to check. A leading `~` is expanded.
    pub path: PathBuf,

    /// Preset supplying the starting existence requirement and checks.
    pub preset: Option<Preset>,

    /// Existence requirement (overrides the preset's).
    pub existence: Option<Existence>,

    /// Whether to resolve symbolic links (default true).
    pub follow_symlinks: Option<bool>,

    /// Checks appended after any preset checks. Each is written as a bare
    /// name (`is_dir`) or a single-key map (`size_gt: 0`).
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub checks: Vec<CheckSpec>,
}

/// A metadata predicate as written in a provisos file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckSpec {
    /// Must be a directory.
    IsDir,
    /// Must be a regular file.
    IsRegular,
    /// Must be a symbolic link.
    IsSymlink,
    /// Size equals the value.
    SizeEq(u64),
    /// Size differs from the value.
    SizeNe(u64),
    /// Size exceeds the value.
    SizeGt(u64),
    /// Size is at least the value.
    SizeGe(u64),
    /// Size is below the value.
    SizeLt(u64),
    /// Size is at most the value.
    SizeLe(u64),
    /// Permission bits equal the octal mode.
    PermEq(String),
    /// Every bit of the octal mode is set.
    PermHasAll(String),
    /// No bit of the octal mode is set.
    PermHasNone(String),
    /// Modified within this many seconds of the check.
    ModifiedWithinSecs(i64),
}

impl CheckSpec {
    /// Build the predicate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unparsable permission mode or a
    /// negative time window.
    pub fn to_check(&self) -> Result<Arc<dyn MetadataCheck>> {
        let built: Arc<dyn MetadataCheck> = match self {
            Self::IsDir => Arc::new(check::is_dir()),
            Self::IsRegular => Arc::new(check::is_regular()),
            Self::IsSymlink => Arc::new(check::is_symlink()),
            Self::SizeEq(n) => Arc::new(check::size_eq(*n)),
            Self::SizeNe(n) => Arc::new(check::size_ne(*n)),
            Self::SizeGt(n) => Arc::new(check::size_gt(*n)),
            Self::SizeGe(n) => Arc::new(check::size_ge(*n)),
            Self::SizeLt(n) => Arc::new(check::size_lt(*n)),
            Self::SizeLe(n) => Arc::new(check::size_le(*n)),
            Self::PermEq(mode) => Arc::new(check::perm_eq(Self::mode(self.name(), mode)?)),
            Self::PermHasAll(mode) => {
                Arc::new(check::perm_has_all(Self::mode(self.name(), mode)?))
            }
            Self::PermHasNone(mode) => {
                Arc::new(check::perm_has_none(Self::mode(self.name(), mode)?))
            }
            Self::ModifiedWithinSecs(secs) => {
                let window = Duration::try_seconds(*secs)
                    .filter(|_| *secs >= 0)
                    .ok_or_else(|| Error::Validation {
                        field: self.name().into(),
                        message: format!("window must be a non-negative number of seconds, got {secs}"),
                    })?;
                Arc::new(check::modified_within(window))
            }
        };
        Ok(built)
    }

    /// The key this check is written under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsDir => "is_dir",
            Self::IsRegular => "is_regular",
            Self::IsSymlink => "is_symlink",
            Self::SizeEq(_) => "size_eq",
            Self::SizeNe(_) => "size_ne",
            Self::SizeGt(_) => "size_gt",
            Self::SizeGe(_) => "size_ge",
            Self::SizeLt(_) => "size_lt",
            Self::SizeLe(_) => "size_le",
            Self::PermEq(_) => "perm_eq",
            Self::PermHasAll(_) => "perm_has_all",
            Self::PermHasNone(_) => "perm_has_none",
            Self::ModifiedWithinSecs(_) => "modified_within_secs",
        }
    }

    fn mode(field: &str, value: &str) -> Result<u32> {
        parse_mode(value).map_err(|e| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })
    }
}

impl ProvisoEntry {
    /// Build the proviso this entry describes.
    ///
    /// The preset (if any) seeds the existence requirement and checks; an
    /// explicit `existence` overrides it and `checks` are appended. Without
    /// a preset the existence requirement defaults to optional.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any check is malformed.
    pub fn to_proviso(&self) -> Result<Proviso> {
        let seed = self.preset.map(Preset::to_proviso).unwrap_or_default();
        let existence = self.existence.unwrap_or(seed.existence());

        let checks = self
            .checks
            .iter()
            .map(CheckSpec::to_check)
            .collect::<Result<Vec<_>>>()?;

        Ok(Proviso::new(existence)
            .with_checks(seed.checks().iter().cloned())
            .with_checks(checks)
            .follow_symlinks(self.follow_symlinks.unwrap_or(true)))
    }

    /// The path with a leading `~` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        expand_tilde(&self.path)
    }

    /// The path with a leading `~` expanded and, if still relative, joined
    /// onto `base` (normally the directory holding the provisos file).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown.
    pub fn resolved_path_from(&self, base: &Path) -> Result<PathBuf> {
        let path = self.resolved_path()?;
        if path.is_relative() {
            Ok(base.join(path))
        } else {
            Ok(path)
        }
    }
}
