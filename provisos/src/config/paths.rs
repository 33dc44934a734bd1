//! Path expansion for provisos files.
//!
//! Only configured paths are expanded. Paths handed directly to
//! [`Proviso::check`](crate::Proviso::check) are used exactly as given.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Only `~` and `~/path` are expanded. Anything else, including a relative
/// name such as `~backup`, is returned unchanged.
///
/// # Errors
///
/// Returns an error if the path needs expanding and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use provisos::config::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.ends_with("project"));
///
/// let unchanged = expand_tilde(Path::new("relative/path")).unwrap();
/// assert_eq!(unchanged, Path::new("relative/path"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    if components.next().map(|c| c.as_os_str()) != Some(OsStr::new("~")) {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}
