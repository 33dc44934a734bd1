//! Provisos files.
//!
//! This module lets host applications keep their path expectations in a
//! YAML file instead of code:
//! - [`schema`]: the file format and conversion of entries to [`Proviso`](crate::Proviso)s
//! - [`loader`]: reading a file and discovering `provisos.yaml` up the tree
//! - [`validator`]: checks that go beyond what deserialization enforces
//!
//! # Examples
//!
//! ```
//! use provisos::config::{ConfigLoader, ConfigValidator};
//!
//! let file = ConfigLoader::parse_str(
//!     "provisos:\n  - path: /tmp\n    preset: dir_exists\n",
//! ).unwrap();
//! ConfigValidator::validate(&file).unwrap();
//!
//! let proviso = file.provisos[0].to_proviso().unwrap();
//! assert_eq!(proviso.describe(), "the filesystem object must exist and must satisfy further checks");
//! ```

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validator;

pub use loader::{ConfigLoader, PROVISOS_FILE_NAME};
pub use paths::expand_tilde;
pub use schema::{CheckSpec, ProvisoEntry, ProvisosFile};
pub use validator::ConfigValidator;
