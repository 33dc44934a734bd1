//! Provisos file validation.
//!
//! Deserialization already rejects unknown keys and malformed values; this
//! module catches what the type system cannot.

use crate::check::parse_mode;
use crate::config::schema::{CheckSpec, ProvisoEntry, ProvisosFile};
use crate::error::{Error, Result};
use crate::existence::Existence;

/// Validates provisos files.
///
/// # Examples
///
/// ```
/// use provisos::config::{ConfigLoader, ConfigValidator};
///
/// let file = ConfigLoader::parse_str("provisos: []").unwrap();
/// assert!(ConfigValidator::validate(&file).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete provisos file.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(file: &ProvisosFile) -> Result<()> {
        if file.provisos.is_empty() {
            return Err(Error::Validation {
                field: "provisos".into(),
                message: "at least one entry is required".into(),
            });
        }

        for (index, entry) in file.provisos.iter().enumerate() {
            Self::validate_entry(index, entry)?;
        }

        Ok(())
    }

    /// Validate a single entry. `index` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the problem.
    pub fn validate_entry(index: usize, entry: &ProvisoEntry) -> Result<()> {
        if entry.path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: format!("provisos[{index}].path"),
                message: "path must not be empty".into(),
            });
        }

        if entry.preset.is_none() && entry.existence.is_none() {
            return Err(Error::Validation {
                field: format!("provisos[{index}]"),
                message: "either preset or existence must be given".into(),
            });
        }

        for check in &entry.checks {
            Self::validate_check(index, check)?;
        }

        Ok(())
    }

    fn validate_check(index: usize, check: &CheckSpec) -> Result<()> {
        match check {
            CheckSpec::PermEq(mode) | CheckSpec::PermHasAll(mode) | CheckSpec::PermHasNone(mode) => {
                parse_mode(mode).map(|_| ()).map_err(|e| Error::Validation {
                    field: format!("provisos[{index}].checks.{}", check.name()),
                    message: e.to_string(),
                })
            }
            CheckSpec::ModifiedWithinSecs(secs) if *secs < 0 => Err(Error::Validation {
                field: format!("provisos[{index}].checks.{}", check.name()),
                message: format!("window must not be negative, got {secs}"),
            }),
            _ => Ok(()),
        }
    }

    /// Whether an entry's checks can never run.
    ///
    /// Such entries are legal; callers may want to warn about them.
    #[must_use]
    pub fn has_unreachable_checks(entry: &ProvisoEntry) -> bool {
        let existence = entry
            .existence
            .or_else(|| entry.preset.map(|p| p.to_proviso().existence()));
        existence == Some(Existence::MustNotExist)
            && (!entry.checks.is_empty()
                || entry.preset.is_some_and(|p| !p.to_proviso().checks().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preset;
    use std::path::PathBuf;

    fn entry(path: &str) -> ProvisoEntry {
        ProvisoEntry {
            path: PathBuf::from(path),
            existence: Some(Existence::MustExist),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_file() {
        let file = ProvisosFile {
            provisos: vec![entry("/srv")],
        };
        assert!(ConfigValidator::validate(&file).is_ok());
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = ConfigValidator::validate(&ProvisosFile::default()).unwrap_err();
        assert!(err.to_string().contains("at least one entry"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let file = ProvisosFile {
            provisos: vec![entry("")],
        };
        let err = ConfigValidator::validate(&file).unwrap_err();
        assert!(err.to_string().contains("provisos[0].path"));
    }

    #[test]
    fn test_missing_requirement_rejected() {
        let mut bare = entry("/srv");
        bare.existence = None;
        assert!(ConfigValidator::validate_entry(0, &bare).is_err());

        bare.preset = Some(Preset::DirExists);
        assert!(ConfigValidator::validate_entry(0, &bare).is_ok());
    }

    #[test]
    fn test_bad_mode_rejected() {
        let mut e = entry("/srv");
        e.checks = vec![CheckSpec::PermEq("999".into())];
        let file = ProvisosFile {
            provisos: vec![entry("/ok"), e],
        };
        let err = ConfigValidator::validate(&file).unwrap_err();
        assert!(err.to_string().contains("provisos[1].checks.perm_eq"));
    }

    #[test]
    fn test_must_not_exist_with_checks_is_legal() {
        let mut e = entry("/srv");
        e.existence = Some(Existence::MustNotExist);
        e.checks = vec![CheckSpec::IsDir];
        assert!(ConfigValidator::validate_entry(0, &e).is_ok());
        assert!(ConfigValidator::has_unreachable_checks(&e));
    }

    #[test]
    fn test_unreachable_checks_from_preset() {
        let mut e = entry("/srv");
        e.preset = Some(Preset::FileExists);
        e.existence = Some(Existence::MustNotExist);
        assert!(ConfigValidator::has_unreachable_checks(&e));

        e.existence = Some(Existence::Optional);
        assert!(!ConfigValidator::has_unreachable_checks(&e));

        let is_new = ProvisoEntry {
            path: PathBuf::from("/srv"),
            preset: Some(Preset::IsNew),
            ..Default::default()
        };
        assert!(!ConfigValidator::has_unreachable_checks(&is_new));
    }
}
