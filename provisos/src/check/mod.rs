//! Metadata predicates.
//!
//! A predicate judges a [`Metadata`] record and either passes or fails with a
//! descriptive [`CheckError`]. The evaluator treats every predicate as opaque:
//! it runs them in order and reports the first failure's message unchanged.
//!
//! Any closure of the right shape is a predicate:
//!
//! ```
//! use provisos::check::{CheckError, MetadataCheck};
//! use std::fs::Metadata;
//!
//! let not_empty = |m: &Metadata| {
//!     if m.len() == 0 {
//!         Err(CheckError::new("the file is empty"))
//!     } else {
//!         Ok(())
//!     }
//! };
//! let metadata = std::fs::metadata(".").unwrap();
//! let _ = not_empty.check(&metadata);
//! ```

mod file_type;
mod mode;
mod modtime;
mod size;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fs::Metadata;

use thiserror::Error;

pub use file_type::{is_dir, is_regular, is_symlink, FileType, FileTypeCheck};
pub use mode::{parse_mode, perm_bits, perm_eq, perm_has_all, perm_has_none, PermCheck, PermRule};
pub use modtime::{modified_after, modified_before, modified_within, ModTimeCheck, ModTimeRule};
pub use size::{
    size_eq, size_ge, size_gt, size_le, size_lt, size_ne, Comparison, SizeCheck,
};

/// A predicate failure.
///
/// The message is authoritative: callers report it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    message: String,
}

impl CheckError {
    /// Create a new predicate failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A judgment on a filesystem object's metadata.
///
/// Implementations must be pure functions of the metadata they are given so
/// that a proviso can be shared across threads.
pub trait MetadataCheck: Send + Sync {
    /// Judge the metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] describing why the metadata was rejected.
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError>;

    /// A short human-readable statement of what this predicate requires.
    fn describe(&self) -> String {
        "custom check".to_string()
    }
}

impl<F> MetadataCheck for F
where
    F: Fn(&Metadata) -> Result<(), CheckError> + Send + Sync,
{
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError> {
        self(metadata)
    }
}
