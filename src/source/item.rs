//! Source file representation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A file selected for export: its original name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Where the bytes were read from, if they came from disk.
    pub path: Option<PathBuf>,

    /// Original filename (final path component).
    pub name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from in-memory bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: None,
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a source file from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let name = file_name_of(path)?.to_string();
        let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;

        tracing::debug!("Read {} ({} bytes)", path.display(), bytes.len());

        Ok(Self {
            path: Some(path.to_path_buf()),
            name,
            bytes,
        })
    }

    /// Where this file came from, for messages.
    pub fn origin(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.name))
    }
}

/// Final path component of `path` as UTF-8.
pub fn file_name_of(path: &Path) -> Result<&str> {
    let name = path
        .file_name()
        .ok_or_else(|| Error::InvalidFilename(format!("No filename in '{}'", path.display())))?;

    name.to_str().ok_or_else(|| {
        Error::InvalidFilename(format!(
            "Filename is not valid UTF-8: '{}'",
            path.display()
        ))
    })
}
