//! The proviso evaluator.
//!
//! A [`Proviso`] bundles an [`Existence`] requirement, a symlink-following
//! policy and an ordered list of metadata predicates. Checking a path runs
//! the existence logic first and only subjects an existing object to the
//! predicates, stopping at the first failure.
//!
//! # Examples
//!
//! ```
//! use provisos::{check, Existence, Proviso};
//!
//! let dir = std::env::temp_dir();
//! assert!(Proviso::dir_exists().check(&dir).is_ok());
//!
//! let proviso = Proviso::new(Existence::Optional).with_check(check::size_gt(0));
//! assert_eq!(
//!     proviso.describe(),
//!     "the filesystem object need not exist but if it does it must satisfy further checks"
//! );
//! ```

use std::fmt;
use std::fs::{self, Metadata};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::sync::Arc;

use crate::check::{self, MetadataCheck};
use crate::error::{Error, Result};
use crate::existence::Existence;

/// The outcome of a metadata lookup.
#[derive(Debug)]
pub enum Lookup {
    /// The object exists.
    Found(Metadata),
    /// The object does not exist.
    NotFound,
    /// The lookup failed for some other reason.
    Failed(io::Error),
}

impl Lookup {
    fn from_io(result: io::Result<Metadata>) -> Self {
        match result {
            Ok(metadata) => Self::Found(metadata),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::NotFound,
            Err(e) => Self::Failed(e),
        }
    }
}

/// The expectations a filesystem object must meet.
///
/// Provisos are immutable once built and cheap to clone; the same value can
/// be used to check any number of paths from any number of threads.
#[derive(Clone)]
pub struct Proviso {
    existence: Existence,
    checks: Vec<Arc<dyn MetadataCheck>>,
    follow_symlinks: bool,
}

impl Default for Proviso {
    fn default() -> Self {
        Self::new(Existence::Optional)
    }
}

impl fmt::Debug for Proviso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proviso")
            .field("existence", &self.existence)
            .field(
                "checks",
                &self.checks.iter().map(|c| c.describe()).collect::<Vec<_>>(),
            )
            .field("follow_symlinks", &self.follow_symlinks)
            .finish()
    }
}

impl Proviso {
    /// Create a proviso with no predicates that follows symlinks.
    #[must_use]
    pub fn new(existence: Existence) -> Self {
        Self {
            existence,
            checks: Vec::new(),
            follow_symlinks: true,
        }
    }

    /// Append a predicate.
    #[must_use]
    pub fn with_check<C>(mut self, check: C) -> Self
    where
        C: MetadataCheck + 'static,
    {
        self.checks.push(Arc::new(check));
        self
    }

    /// Append already-shared predicates, keeping their order.
    #[must_use]
    pub fn with_checks<I>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn MetadataCheck>>,
    {
        self.checks.extend(checks);
        self
    }

    /// Set whether symbolic links are resolved before inspection.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Inspect a symbolic link itself rather than its target.
    #[must_use]
    pub fn dont_follow_symlinks(self) -> Self {
        self.follow_symlinks(false)
    }

    /// The existence requirement.
    #[must_use]
    pub fn existence(&self) -> Existence {
        self.existence
    }

    /// The predicates, in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[Arc<dyn MetadataCheck>] {
        &self.checks
    }

    /// Whether symbolic links are resolved.
    #[must_use]
    pub fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    /// Must exist as a directory.
    #[must_use]
    pub fn dir_exists() -> Self {
        Self::new(Existence::MustExist).with_check(check::is_dir())
    }

    /// Must exist as a regular file.
    #[must_use]
    pub fn file_exists() -> Self {
        Self::new(Existence::MustExist).with_check(check::is_regular())
    }

    /// Must exist as a regular file with at least one byte.
    #[must_use]
    pub fn file_non_empty() -> Self {
        Self::new(Existence::MustExist)
            .with_check(check::is_regular())
            .with_check(check::size_gt(0))
    }

    /// Must not exist.
    #[must_use]
    pub fn is_new() -> Self {
        Self::new(Existence::MustNotExist)
    }

    /// Look up metadata for `path` according to the symlink policy.
    ///
    /// Absence is reported as [`Lookup::NotFound`], never as a failure.
    pub fn fetch_metadata(&self, path: &Path) -> Lookup {
        if self.follow_symlinks {
            Lookup::from_io(fs::metadata(path))
        } else {
            Lookup::from_io(fs::symlink_metadata(path))
        }
    }

    /// Check that the object at `path` satisfies this proviso.
    ///
    /// If the object is absent and is not required, nothing else is checked.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingButRequired`] if the object must exist but does not
    /// - [`Error::PresentButForbidden`] if the object must not exist but does
    /// - [`Error::Retrieval`] if the metadata lookup fails for another reason
    /// - [`Error::Check`] carrying the first failing predicate's message
    pub fn check(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let metadata = match self.fetch_metadata(path) {
            Lookup::NotFound => {
                log::debug!("{}: not found ({})", path.display(), self.existence);
                if self.existence == Existence::MustExist {
                    return Err(Error::MissingButRequired {
                        path: path.to_path_buf(),
                    });
                }
                return Ok(());
            }
            Lookup::Found(_) if self.existence == Existence::MustNotExist => {
                log::debug!("{}: found but must not exist", path.display());
                return Err(Error::PresentButForbidden {
                    path: path.to_path_buf(),
                });
            }
            Lookup::Failed(source) => {
                log::debug!("{}: metadata lookup failed: {source}", path.display());
                return Err(Error::Retrieval {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Lookup::Found(metadata) => metadata,
        };

        for check in &self.checks {
            if let Err(e) = check.check(&metadata) {
                log::debug!("{}: failed '{}': {e}", path.display(), check.describe());
                return Err(Error::Check(e));
            }
        }

        Ok(())
    }

    /// Describe the requirements in words.
    ///
    /// Depends only on the existence requirement and whether any predicates
    /// are present. Predicates of a `MustNotExist` proviso are never
    /// mentioned since they can never run.
    #[must_use]
    pub fn describe(&self) -> String {
        let (base, joiner) = match self.existence {
            Existence::MustNotExist => return "the filesystem object must not exist".to_string(),
            Existence::MustExist => ("the filesystem object must exist", " and"),
            Existence::Optional => ("the filesystem object need not exist", " but if it does it"),
        };

        if self.checks.is_empty() {
            base.to_string()
        } else {
            format!("{base}{joiner} must satisfy further checks")
        }
    }

    /// Describe each reachable predicate, in order.
    #[must_use]
    pub fn describe_checks(&self) -> Vec<String> {
        if self.existence == Existence::MustNotExist {
            return Vec::new();
        }
        self.checks.iter().map(|c| c.describe()).collect()
    }
}

impl fmt::Display for Proviso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
