//! Document persistence
//!
//! The session loads the saved document once at startup and saves the raw
//! text on every change. Stores never interpret the text.

pub mod file;
pub mod local;

pub use file::FileStore;
pub use local::LocalStorageStore;

use crate::error::Result;

/// Persistence collaborator for the document text
///
/// Different implementations can use different backing stores (memory, a
/// file on disk, browser `localStorage`).
pub trait DocumentStore {
    /// Saved text, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Persist `text` verbatim, replacing any previous save
    fn save(&mut self, text: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    saved: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            saved: Some(text.into()),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, text: &str) -> Result<()> {
        self.saved = Some(text.to_string());
        self.saves += 1;
        Ok(())
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, text: &str) -> Result<()> {
        (**self).save(text)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for &mut S {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, text: &str) -> Result<()> {
        (**self).save(text)
    }
}
