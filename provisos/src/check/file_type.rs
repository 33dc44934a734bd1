//! File type predicates.

use std::fmt;
use std::fs::Metadata;

use super::{CheckError, MetadataCheck};

/// The broad type of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A directory.
    Directory,
    /// A regular file.
    Regular,
    /// A symbolic link (only visible when links are not followed).
    Symlink,
    /// Anything else: sockets, pipes, devices.
    Other,
}

impl FileType {
    /// Classify the metadata.
    #[must_use]
    pub fn of(metadata: &Metadata) -> Self {
        let ft = metadata.file_type();
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::Regular
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "a directory"),
            Self::Regular => write!(f, "a regular file"),
            Self::Symlink => write!(f, "a symbolic link"),
            Self::Other => write!(f, "a special file"),
        }
    }
}

/// Requires the object to be of a particular type.
///
/// # Examples
///
/// ```
/// use provisos::check::{is_dir, MetadataCheck};
///
/// let dir = std::env::temp_dir();
/// let metadata = std::fs::metadata(&dir).unwrap();
/// assert!(is_dir().check(&metadata).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeCheck {
    expected: FileType,
}

impl FileTypeCheck {
    /// Create a check requiring the given type.
    #[must_use]
    pub const fn new(expected: FileType) -> Self {
        Self { expected }
    }
}

impl MetadataCheck for FileTypeCheck {
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError> {
        let actual = FileType::of(metadata);
        if actual == self.expected {
            Ok(())
        } else {
            Err(CheckError::new(format!(
                "should be {} but is {actual}",
                self.expected
            )))
        }
    }

    fn describe(&self) -> String {
        format!("is {}", self.expected)
    }
}

/// Requires a directory.
#[must_use]
pub const fn is_dir() -> FileTypeCheck {
    FileTypeCheck::new(FileType::Directory)
}

/// Requires a regular file.
#[must_use]
pub const fn is_regular() -> FileTypeCheck {
    FileTypeCheck::new(FileType::Regular)
}

/// Requires a symbolic link. Only meaningful when links are not followed.
#[must_use]
pub const fn is_symlink() -> FileTypeCheck {
    FileTypeCheck::new(FileType::Symlink)
}
