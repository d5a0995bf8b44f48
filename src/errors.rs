use crate::artifacts::diff::change_region::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Failures surfaced by the comparison pipeline
///
/// Parsing, diffing and rendering are total; only reading and decoding the
/// inputs can fail.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("cannot read {}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{side} input is not valid UTF-8")]
    Encoding {
        side: Side,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("cannot read ignore list {}", .path.display())]
    IgnoreList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiffError {
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::Input {
            path: path.into(),
            source,
        }
    }
}
