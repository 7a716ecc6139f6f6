use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

impl WriteResult {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written)
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace whatever is there (`--force`)
    Always,
    /// Only create if file doesn't exist
    #[default]
    IfMissing,
}

/// A rendered file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file that is only written when nothing exists at `path`
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Override the overwrite rule.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write the file according to its overwrite rule.
    ///
    /// With [`Overwrite::IfMissing`] an existing file is left untouched and
    /// [`WriteResult::Skipped`] is returned instead of an error.
    pub fn write(&self) -> Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => create_file(&self.path, &self.content),
        }
    }
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() && !dir.is_dir() {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn create_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteResult::Skipped),
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to create '{}'", path.display()));
        }
    };
    file.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(WriteResult::Written)
}
