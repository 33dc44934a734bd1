//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - Filesystem fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment rooted at a fresh temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the provisos binary.
    ///
    /// The command runs in the temporary directory with the log-mode
    /// variable cleared so that output does not depend on the caller.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("provisos").expect("Failed to find provisos binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("PROVISOS_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of a name under the environment that is never created.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given contents.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a file with the given permission bits.
    #[cfg(unix)]
    pub fn create_file_with_mode(&self, name: &str, contents: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.create_file(name, contents);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
        path
    }

    /// Write a provisos file named `provisos.yaml` under `dir`.
    pub fn write_provisos(&self, dir: &str, yaml: &str) -> PathBuf {
        let name = if dir.is_empty() {
            "provisos.yaml".to_string()
        } else {
            format!("{dir}/provisos.yaml")
        };
        self.create_file(&name, yaml)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
