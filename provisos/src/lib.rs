#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # provisos
//!
//! Declarative checks on filesystem objects.
//!
//! A [`Proviso`] states what the object at a path must satisfy: whether it
//! must exist, must not exist or may be absent, whether symbolic links are
//! followed, and an ordered list of metadata predicates. Checking a path
//! evaluates the existence requirement first and only then runs the
//! predicates, stopping at the first failure.
//!
//! ## Core Types
//!
//! - [`Proviso`] and [`Existence`]: the expectations and how to check them
//! - [`Preset`]: named provisos for common cases
//! - [`check`]: the [`MetadataCheck`] trait and built-in predicates
//! - [`config`]: YAML provisos files
//! - [`CheckReport`]: batch checking with per-path outcomes
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use provisos::{check, Existence, Proviso};
//!
//! let dir = std::env::temp_dir();
//!
//! // Must be an existing directory
//! assert!(Proviso::dir_exists().check(&dir).is_ok());
//!
//! // Must not exist
//! let err = Proviso::is_new().check(&dir).unwrap_err();
//! assert!(err.is_present_but_forbidden());
//!
//! // Optional, but if present must be a regular file
//! let proviso = Proviso::new(Existence::Optional).with_check(check::is_regular());
//! assert!(proviso.check(dir.join("provisos-doc-nonesuch")).is_ok());
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod existence;
pub mod logging;
pub mod preset;
pub mod proviso;
pub mod report;

// Re-export key types at crate root for convenience
pub use check::{CheckError, MetadataCheck};
pub use error::{Error, FailureKind, Result};
pub use existence::Existence;
pub use logging::{init_logger, LogLevel, Logger};
pub use preset::Preset;
pub use proviso::{Lookup, Proviso};
pub use report::{CheckOutcome, CheckReport, ReportFormat};
