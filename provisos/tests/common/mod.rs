//! Common test utilities for integration tests.
//!
//! This module provides a fixture tree builder for exercising provisos
//! against real filesystem objects.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory populated with named filesystem objects.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A path under the root that is never created.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Create a regular file with the given contents.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Create a directory.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        path
    }

    /// Create a regular file with the given permission bits.
    #[cfg(unix)]
    pub fn file_with_mode(&self, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(name, "contents");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to set fixture permissions");
        path
    }

    /// Create a symbolic link named `name` pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, name: &str, target: &Path) -> PathBuf {
        let link = self.root().join(name);
        std::os::unix::fs::symlink(target, &link).expect("Failed to create fixture symlink");
        link
    }
}
