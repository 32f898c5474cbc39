use std::{
    io,
    path::{Path, PathBuf},
};

/// Write `content` to `path`, creating parent directories as needed.
///
/// Existing files are truncated; generated output always replaces what was
/// there before.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// A generated file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, overwriting any previous content
    pub fn write(&self) -> io::Result<()> {
        write_file(&self.path, &self.content)
    }

    /// Consume the file, returning its path and content
    pub fn into_parts(self) -> (PathBuf, String) {
        (self.path, self.content)
    }
}
