//! Provisos file discovery and loading.

use crate::config::schema::ProvisosFile;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The file name searched for by [`ConfigLoader::discover`].
pub const PROVISOS_FILE_NAME: &str = "provisos.yaml";

/// Loads provisos files.
///
/// # Examples
///
/// ```no_run
/// use provisos::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(path) = ConfigLoader::discover(Path::new(".")) {
///     let file = ConfigLoader::load_file(&path).unwrap();
///     println!("{} entries in {}", file.provisos.len(), path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the nearest `provisos.yaml`, walking up from `start_dir`.
    ///
    /// Returns `None` if no ancestor contains one.
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROVISOS_FILE_NAME);
            if candidate.is_file() {
                log::debug!("using provisos file {}", candidate.display());
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load and parse a YAML provisos file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<ProvisosFile> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read provisos file: {e}"),
        })?;

        Self::parse_str(&contents)
    }

    /// Parse provisos file contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or does not
    /// match the schema.
    pub fn parse_str(contents: &str) -> Result<ProvisosFile> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
