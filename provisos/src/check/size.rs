//! Size predicates.

use std::fmt;
use std::fs::Metadata;

use super::{CheckError, MetadataCheck};

/// How an actual value is compared against a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// actual == limit
    Eq,
    /// actual != limit
    Ne,
    /// actual > limit
    Gt,
    /// actual >= limit
    Ge,
    /// actual < limit
    Lt,
    /// actual <= limit
    Le,
}

impl Comparison {
    /// Apply the comparison.
    #[must_use]
    pub fn holds(self, actual: u64, limit: u64) -> bool {
        match self {
            Self::Eq => actual == limit,
            Self::Ne => actual != limit,
            Self::Gt => actual > limit,
            Self::Ge => actual >= limit,
            Self::Lt => actual < limit,
            Self::Le => actual <= limit,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "equal to"),
            Self::Ne => write!(f, "not equal to"),
            Self::Gt => write!(f, "greater than"),
            Self::Ge => write!(f, "greater than or equal to"),
            Self::Lt => write!(f, "less than"),
            Self::Le => write!(f, "less than or equal to"),
        }
    }
}

/// Compares the object's size in bytes against a limit.
///
/// # Examples
///
/// ```
/// use provisos::check::{size_gt, MetadataCheck};
///
/// assert_eq!(size_gt(0).describe(), "size is greater than 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCheck {
    comparison: Comparison,
    limit: u64,
}

impl SizeCheck {
    /// Create a size check.
    #[must_use]
    pub const fn new(comparison: Comparison, limit: u64) -> Self {
        Self { comparison, limit }
    }
}

impl MetadataCheck for SizeCheck {
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError> {
        let actual = metadata.len();
        if self.comparison.holds(actual, self.limit) {
            Ok(())
        } else {
            Err(CheckError::new(format!(
                "the size ({actual}) should be {} {}",
                self.comparison, self.limit
            )))
        }
    }

    fn describe(&self) -> String {
        format!("size is {} {}", self.comparison, self.limit)
    }
}

/// Size must equal `limit`.
#[must_use]
pub const fn size_eq(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Eq, limit)
}

/// Size must differ from `limit`.
#[must_use]
pub const fn size_ne(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Ne, limit)
}

/// Size must exceed `limit`.
#[must_use]
pub const fn size_gt(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Gt, limit)
}

/// Size must be at least `limit`.
#[must_use]
pub const fn size_ge(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Ge, limit)
}

/// Size must be below `limit`.
#[must_use]
pub const fn size_lt(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Lt, limit)
}

/// Size must be at most `limit`.
#[must_use]
pub const fn size_le(limit: u64) -> SizeCheck {
    SizeCheck::new(Comparison::Le, limit)
}
