//! Named provisos for common cases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::proviso::Proviso;

/// A named, commonly used proviso.
///
/// # Examples
///
/// ```
/// use provisos::Preset;
///
/// let preset: Preset = "file-non-empty".parse().unwrap();
/// assert_eq!(preset.to_proviso().checks().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Must exist as a directory.
    DirExists,
    /// Must exist as a regular file.
    FileExists,
    /// Must exist as a non-empty regular file.
    FileNonEmpty,
    /// Must not exist.
    IsNew,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::DirExists,
        Self::FileExists,
        Self::FileNonEmpty,
        Self::IsNew,
    ];

    /// Build the proviso this preset names.
    #[must_use]
    pub fn to_proviso(self) -> Proviso {
        match self {
            Self::DirExists => Proviso::dir_exists(),
            Self::FileExists => Proviso::file_exists(),
            Self::FileNonEmpty => Proviso::file_non_empty(),
            Self::IsNew => Proviso::is_new(),
        }
    }

    /// Parses a preset name (case-insensitive, `_` accepted for `-`).
    ///
    /// # Errors
    ///
    /// Returns an error naming the accepted values if the name is unknown.
    pub fn parse(s: &str) -> Result<Self, String> {
        let wanted = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.to_string() == wanted)
            .ok_or_else(|| {
                let names: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
                format!("invalid preset: {s} (expected one of {})", names.join(", "))
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirExists => write!(f, "dir-exists"),
            Self::FileExists => write!(f, "file-exists"),
            Self::FileNonEmpty => write!(f, "file-non-empty"),
            Self::IsNew => write!(f, "is-new"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
