//! Batch checking and reporting.
//!
//! A [`CheckReport`] evaluates many (path, proviso) pairs, keeps going after
//! failures and records one [`CheckOutcome`] per pair so that every failure
//! can be attributed to its path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FailureKind, Result};
use crate::proviso::Proviso;

/// The result of checking one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// The checked path.
    pub path: PathBuf,
    /// The proviso's description.
    pub description: String,
    /// Whether the path satisfied the proviso.
    pub passed: bool,
    /// The failure kind, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    /// The failure message, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    /// Check `path` against `proviso` and record the outcome.
    #[must_use]
    pub fn evaluate(path: &Path, proviso: &Proviso) -> Self {
        let description = proviso.describe();
        match proviso.check(path) {
            Ok(()) => Self {
                path: path.to_path_buf(),
                description,
                passed: true,
                kind: None,
                message: None,
            },
            Err(e) => Self {
                path: path.to_path_buf(),
                description,
                passed: false,
                kind: e.kind(),
                message: Some(e.to_string()),
            },
        }
    }
}

/// Outcomes for a batch of checks, in input order.
///
/// # Examples
///
/// ```
/// use provisos::{CheckReport, Proviso};
/// use std::path::PathBuf;
///
/// let dir = std::env::temp_dir();
/// let report = CheckReport::run(vec![
///     (dir.clone(), Proviso::dir_exists()),
///     (dir.join("provisos-doc-nonesuch"), Proviso::is_new()),
/// ]);
/// assert!(report.all_passed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// One outcome per checked path.
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// Check every pair in order.
    #[must_use]
    pub fn run<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, Proviso)>,
        P: AsRef<Path>,
    {
        let outcomes = entries
            .into_iter()
            .map(|(path, proviso)| CheckOutcome::evaluate(path.as_ref(), &proviso))
            .collect();
        Self { outcomes }
    }

    /// Whether every path passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// The failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Render one line per outcome.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| match &o.message {
                None => format!("ok   {}", o.path.display()),
                Some(message) => format!("FAIL {}: {message}", o.path.display()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::Validation {
            field: "report".into(),
            message: format!("failed to serialize report: {e}"),
        })
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }
}

/// Available report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per path.
    #[default]
    Text,
    /// JSON document.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid report format: {s} (expected text or json)")),
        }
    }
}
