//! Modification-time predicates.

use std::fs::Metadata;

use chrono::{DateTime, Duration, Utc};

use super::{CheckError, MetadataCheck};

/// How the modification time is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModTimeRule {
    /// Modified strictly after the instant.
    After(DateTime<Utc>),
    /// Modified strictly before the instant.
    Before(DateTime<Utc>),
    /// Modified no longer ago than the duration, measured when checked.
    Within(Duration),
}

/// Judges the last-modification time of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModTimeCheck {
    rule: ModTimeRule,
}

impl ModTimeCheck {
    /// Create a modification-time check.
    #[must_use]
    pub const fn new(rule: ModTimeRule) -> Self {
        Self { rule }
    }
}

fn format_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl MetadataCheck for ModTimeCheck {
    fn check(&self, metadata: &Metadata) -> Result<(), CheckError> {
        let modified: DateTime<Utc> = metadata
            .modified()
            .map_err(|e| CheckError::new(format!("the modification time is unavailable: {e}")))?
            .into();

        match self.rule {
            ModTimeRule::After(limit) if modified <= limit => Err(CheckError::new(format!(
                "the modification time ({}) should be after {}",
                format_time(modified),
                format_time(limit)
            ))),
            ModTimeRule::Before(limit) if modified >= limit => Err(CheckError::new(format!(
                "the modification time ({}) should be before {}",
                format_time(modified),
                format_time(limit)
            ))),
            ModTimeRule::Within(window) => {
                let age = Utc::now() - modified;
                if age > window {
                    Err(CheckError::new(format!(
                        "the modification time ({}) should be within the last {}s",
                        format_time(modified),
                        window.num_seconds()
                    )))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn describe(&self) -> String {
        match self.rule {
            ModTimeRule::After(limit) => format!("modified after {}", format_time(limit)),
            ModTimeRule::Before(limit) => format!("modified before {}", format_time(limit)),
            ModTimeRule::Within(window) => {
                format!("modified within the last {}s", window.num_seconds())
            }
        }
    }
}

/// Must have been modified after `instant`.
#[must_use]
pub const fn modified_after(instant: DateTime<Utc>) -> ModTimeCheck {
    ModTimeCheck::new(ModTimeRule::After(instant))
}

/// Must have been modified before `instant`.
#[must_use]
pub const fn modified_before(instant: DateTime<Utc>) -> ModTimeCheck {
    ModTimeCheck::new(ModTimeRule::Before(instant))
}

/// Must have been modified within `window` of the time the check runs.
#[must_use]
pub const fn modified_within(window: Duration) -> ModTimeCheck {
    ModTimeCheck::new(ModTimeRule::Within(window))
}
