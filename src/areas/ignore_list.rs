use crate::errors::{DiffError, Result};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_IGNORE_FILE: &str = "/etc/cfgdiff/ignore";

/// Devices whose configuration changes are never reported
///
/// One identifier per line; blank lines and `#` comments are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: BTreeSet<String>,
}

impl IgnoreList {
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        IgnoreList { entries }
    }

    /// Load the list, treating a missing file as an empty list
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(DiffError::IgnoreList {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `target` is listed by its path as given or by its file name
    pub fn matches(&self, target: &Path) -> bool {
        let full = target.to_string_lossy();
        let name = target.file_name().map(|name| name.to_string_lossy());

        self.entries.contains(full.as_ref())
            || name.is_some_and(|name| self.entries.contains(name.as_ref()))
    }
}
