use crate::errors::{DiffError, Result};
use std::path::{Path, PathBuf};

/// The directory input paths are resolved against
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    /// Read a configuration file fully into memory
    pub fn read_file(&self, file_path: &Path) -> Result<Vec<u8>> {
        let resolved = self.resolve(file_path);

        let content = std::fs::read(&resolved).map_err(|source| DiffError::input(file_path, source))?;
        tracing::debug!(path = %resolved.display(), bytes = content.len(), "read input file");

        Ok(content)
    }
}
