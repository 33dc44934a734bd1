//! The existence requirement of a proviso.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether the filesystem object should exist.
///
/// The answer is only valid at the moment the check is made; nothing stops
/// another process creating or removing the object afterwards.
///
/// # Examples
///
/// ```
/// use provisos::Existence;
///
/// assert_eq!(Existence::default(), Existence::Optional);
/// assert_eq!("must-exist".parse::<Existence>().unwrap(), Existence::MustExist);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Existence {
    /// No constraint on existence. Predicates still apply when the object exists.
    #[default]
    Optional,
    /// The object must be present.
    MustExist,
    /// The object must be absent. Predicates are never evaluated.
    MustNotExist,
}

impl fmt::Display for Existence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optional => write!(f, "optional"),
            Self::MustExist => write!(f, "must-exist"),
            Self::MustNotExist => write!(f, "must-not-exist"),
        }
    }
}

impl Existence {
    /// Parses an existence requirement from a string.
    ///
    /// Recognizes "optional", "must-exist" and "must-not-exist"
    /// (case-insensitive, `_` accepted in place of `-`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "optional" => Ok(Self::Optional),
            "must-exist" => Ok(Self::MustExist),
            "must-not-exist" => Ok(Self::MustNotExist),
            _ => Err(format!("invalid existence requirement: {s}")),
        }
    }
}

impl FromStr for Existence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
