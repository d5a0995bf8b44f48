//! Context-aware comparison of hierarchical device configurations
//!
//! Configuration text is normalized, parsed into sections and groups, diffed
//! line by line and every change is reported together with the block it
//! belongs to.
//!
//! ```
//! use cfgdiff::{ParseOptions, diff};
//!
//! let report = diff(
//!     "interface Gi0/1\n description old\n",
//!     "interface Gi0/1\n description new\n",
//!     &ParseOptions::default(),
//! );
//!
//! assert_eq!(
//!     report.lines(),
//!     vec![" interface Gi0/1", "- description old", "+ description new"]
//! );
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;

pub use artifacts::diff::{diff, diff_bytes};
pub use artifacts::normalize::document::{NormalizedDocument, normalize};
pub use artifacts::report::Report;
pub use artifacts::structure::parser::ParseOptions;
pub use errors::{DiffError, Result};
