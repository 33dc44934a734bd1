//! Error types for the provisos library.
//!
//! The evaluator reports three existence-related failure kinds, each carrying
//! the checked path, plus predicate failures passed through verbatim. The
//! remaining variants belong to the provisos-file layer.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::check::CheckError;

/// Result type alias for operations that may fail with a provisos error.
///
/// # Examples
///
/// ```
/// use provisos::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(0o600)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the provisos library.
#[derive(Debug, Error)]
pub enum Error {
    /// The object was required to exist but was absent.
    #[error("path {}: should exist but does not", path.display())]
    MissingButRequired {
        /// The checked path.
        path: PathBuf,
    },

    /// The object was required to be absent but was present.
    #[error("path {}: should not exist but does", path.display())]
    PresentButForbidden {
        /// The checked path.
        path: PathBuf,
    },

    /// The metadata lookup failed for a reason other than absence.
    #[error("path {}: {source}", path.display())]
    Retrieval {
        /// The checked path.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A metadata predicate rejected the object.
    ///
    /// The predicate's message is reported unchanged.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A provisos file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred outside of a proviso check.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// The kind of a failed proviso check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// See [`Error::MissingButRequired`].
    MissingButRequired,
    /// See [`Error::PresentButForbidden`].
    PresentButForbidden,
    /// See [`Error::Retrieval`].
    RetrievalError,
    /// See [`Error::Check`].
    CheckFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingButRequired => write!(f, "missing_but_required"),
            Self::PresentButForbidden => write!(f, "present_but_forbidden"),
            Self::RetrievalError => write!(f, "retrieval_error"),
            Self::CheckFailed => write!(f, "check_failed"),
        }
    }
}

impl Error {
    /// Classify a proviso check failure.
    ///
    /// Returns `None` for errors that cannot come out of a check, such as
    /// configuration or validation errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use provisos::{Error, FailureKind};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::MissingButRequired { path: PathBuf::from("/nonexistent") };
    /// assert_eq!(err.kind(), Some(FailureKind::MissingButRequired));
    /// ```
    #[must_use]
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::MissingButRequired { .. } => Some(FailureKind::MissingButRequired),
            Self::PresentButForbidden { .. } => Some(FailureKind::PresentButForbidden),
            Self::Retrieval { .. } => Some(FailureKind::RetrievalError),
            Self::Check(_) => Some(FailureKind::CheckFailed),
            _ => None,
        }
    }

    /// Check if the object was required but absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use provisos::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::MissingButRequired { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_missing_but_required());
    /// ```
    #[must_use]
    pub fn is_missing_but_required(&self) -> bool {
        matches!(self, Self::MissingButRequired { .. })
    }

    /// Check if the object was forbidden but present.
    #[must_use]
    pub fn is_present_but_forbidden(&self) -> bool {
        matches!(self, Self::PresentButForbidden { .. })
    }

    /// Check if the metadata lookup itself failed.
    #[must_use]
    pub fn is_retrieval_error(&self) -> bool {
        matches!(self, Self::Retrieval { .. })
    }

    /// Check if a metadata predicate rejected the object.
    #[must_use]
    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::Check(_))
    }
}
