//! Permission-bit predicates.

use std::fs::Metadata;

use super::{CheckError, MetadataCheck};

/// Highest mode accepted by [`parse_mode`]: permission bits plus
/// setuid, setgid and sticky.
const MAX_MODE: u32 = 0o7777;

/// Mask selecting the bits compared by [`PermCheck`]: permission bits plus
/// setuid, setgid and sticky, matching what [`parse_mode`] accepts.
const PERM_MASK: u32 = MAX_MODE;

/// Extract the permission bits of an object.
///
/// On Unix these are the low twelve bits of the mode, including setuid,
/// setgid and sticky. Elsewhere only the read-only flag is available, so it
/// maps to 0o444 or 0o666.
#[must_use]
pub fn perm_bits(metadata: &Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & PERM_MASK
    }
    #[cfg(not(unix))]
    {
        if metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        }
    }
}

/// Parse an octal mode string.
///
/// Accepts `"600"`, `"0600"` and `"0o600"`.
///
/// # Errors
///
/// Returns an error if the string is not octal or exceeds 0o7777.
///
/// # Examples
///
/// ```
/// use provisos::check::parse_mode;
///
/// assert_eq!(parse_mode("0600").unwrap(), 0o600);
/// assert_eq!(parse_mode("0o755").unwrap(), 0o755);
/// assert!(parse_mode("0800").is_err());
/// ```
pub fn parse_mode(s: &str) -> Result<u32, CheckError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
        .unwrap_or(trimmed);

    let mode = u32::from_str_radix(digits, 8)
        .map_err(|_| CheckError::new(format!("invalid octal mode '{s}'")))?;

    if mode > MAX_MODE {
        return Err(CheckError::new(format!(
            "mode '{s}' is out of range (max {MAX_MODE:04o})"
        )));
    }

    Ok(mode)
}

/// How the permission bits are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermRule {
    /// The bits equal the given value exactly.
    Equal(u32),
    /// Every given bit is set.
    HasAll(u32),
    /// None of the given bits is set.
    HasNone(u32),
}

/// Judges the permission bits of an object.
///
/// # Examples
///
/// ```
/// use provisos::check::{perm_eq, MetadataCheck};
///
/// assert_eq!(perm_eq(0o600).describe(), "permissions equal 0600");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermCheck {
    rule: PermRule,
}

impl PermCheck {
    /// Create a permission check.
    #[must_use]
    pub const fn new(rule: PermRule) -> Self {
        Self { rule }
    }
}

impl MetadataCheck for PermCheck {
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError> {
        let actual = perm_bits(metadata);
        match self.rule {
            PermRule::Equal(want) if actual != want & PERM_MASK => Err(CheckError::new(format!(
                "the permissions ({actual:04o}) should be equal to {:04o}",
                want & PERM_MASK
            ))),
            PermRule::HasAll(bits) if actual & bits != bits & PERM_MASK => {
                Err(CheckError::new(format!(
                    "the permissions ({actual:04o}) should have all of {:04o} set",
                    bits & PERM_MASK
                )))
            }
            PermRule::HasNone(bits) if actual & bits != 0 => Err(CheckError::new(format!(
                "the permissions ({actual:04o}) should have none of {:04o} set",
                bits & PERM_MASK
            ))),
            _ => Ok(()),
        }
    }

    fn describe(&self) -> String {
        match self.rule {
            PermRule::Equal(want) => format!("permissions equal {:04o}", want & PERM_MASK),
            PermRule::HasAll(bits) => format!("permissions include {:04o}", bits & PERM_MASK),
            PermRule::HasNone(bits) => format!("permissions exclude {:04o}", bits & PERM_MASK),
        }
    }
}

/// Permission bits must equal `mode`.
#[must_use]
pub const fn perm_eq(mode: u32) -> PermCheck {
    PermCheck::new(PermRule::Equal(mode))
}

/// Every bit in `bits` must be set.
#[must_use]
pub const fn perm_has_all(bits: u32) -> PermCheck {
    PermCheck::new(PermRule::HasAll(bits))
}

/// No bit in `bits` may be set.
#[must_use]
pub const fn perm_has_none(bits: u32) -> PermCheck {
    PermCheck::new(PermRule::HasNone(bits))
}
