//! File-backed store for native hosts

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::DocumentStore;
use crate::error::{EditorError, Result};

/// Keeps the document in a single file
///
/// A missing file means nothing has been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> EditorError {
        EditorError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }
}
