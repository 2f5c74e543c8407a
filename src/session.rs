//! Editor session: editor state wired to a persistence collaborator
//!
//! Loads the saved document once when opened and saves the raw text after
//! every change. The outline core never touches the store.

use crate::config::EditorConfig;
use crate::constants::WELCOME_DOCUMENT;
use crate::error::Result;
use crate::models::{EditorState, ExportFormat, ExportedFile};
use crate::navigation::{ScrollRequest, Subscription, VisibilityEvent};
use crate::outline::Outline;
use crate::storage::DocumentStore;

pub struct EditorSession<S: DocumentStore> {
    store: S,
    state: EditorState,
    config: EditorConfig,
}

impl<S: DocumentStore> EditorSession<S> {
    /// Open a session on `store`
    ///
    /// When nothing is saved the welcome document is used (or an empty one if
    /// `welcome_document` is off) and written back to the store. A saved empty
    /// string is a real document and is kept. A failed load is returned as an
    /// error and the store is left untouched.
    pub fn open(store: S, config: EditorConfig) -> Result<Self> {
        config.validate()?;

        let saved = store.load().map_err(|e| {
            log::error!("could not load saved document: {}", e);
            e
        })?;
        let restored = saved.is_some();
        let text = saved.unwrap_or_else(|| {
            if config.welcome_document {
                WELCOME_DOCUMENT.to_string()
            } else {
                String::new()
            }
        });

        let state = EditorState::with_band(text, config.viewport);
        let mut session = Self { store, state, config };

        if !restored {
            if let Err(e) = session.store.save(session.state.text()) {
                log::warn!("could not persist initial document: {}", e);
            }
        }

        log::info!(
            "editor session opened ({} document, {} headings)",
            if restored { "restored" } else { "new" },
            session.state.outline().len()
        );
        Ok(session)
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn outline(&self) -> &Outline {
        self.state.outline()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscription(&self) -> &Subscription {
        self.state.subscription()
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.state.active_slug()
    }

    /// Replace the document; saves when the text actually changed
    ///
    /// The in-memory state is updated even if saving fails.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<bool> {
        if !self.state.set_text(text) {
            return Ok(false);
        }
        self.store.save(self.state.text())?;
        Ok(true)
    }

    /// Replace the document with the contents of an uploaded file
    pub fn upload(&mut self, contents: impl Into<String>) -> Result<bool> {
        self.set_text(contents)
    }

    /// Empty the document; confirming with the user is the host's job
    pub fn clear(&mut self) -> Result<bool> {
        self.set_text(String::new())
    }

    pub fn handle_visibility(&mut self, events: &[VisibilityEvent]) -> bool {
        self.state.handle_visibility(events)
    }

    pub fn navigate_to(&mut self, slug: &str) -> ScrollRequest {
        self.state.navigate_to(slug)
    }

    pub fn export(&self, format: ExportFormat) -> ExportedFile {
        ExportedFile::new(&self.config.export_basename, format, self.state.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::storage::MemoryStore;

    /// Nothing saved, every save rejected
    struct ReadOnlyStore;

    impl DocumentStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&mut self, _text: &str) -> Result<()> {
            Err(EditorError::Storage("quota exceeded".to_string()))
        }
    }

    /// Load rejected, saves accepted and recorded
    #[derive(Default)]
    struct UnreadableStore {
        saves: Vec<String>,
    }

    impl DocumentStore for UnreadableStore {
        fn load(&self) -> Result<Option<String>> {
            Err(EditorError::Storage("getItem failed".to_string()))
        }

        fn save(&mut self, text: &str) -> Result<()> {
            self.saves.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_open_empty_store_uses_welcome_document() {
        let session = EditorSession::open(MemoryStore::new(), EditorConfig::default()).unwrap();
        assert_eq!(session.text(), WELCOME_DOCUMENT);
        assert_eq!(session.store().saved(), Some(WELCOME_DOCUMENT));
    }

    #[test]
    fn test_open_restores_saved_text() {
        let session = EditorSession::open(MemoryStore::with_text("# Mine"), EditorConfig::default()).unwrap();
        assert_eq!(session.text(), "# Mine");
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_saved_empty_document_is_kept() {
        let session = EditorSession::open(MemoryStore::with_text(""), EditorConfig::default()).unwrap();
        assert_eq!(session.text(), "");
        assert!(session.outline().is_empty());
    }

    #[test]
    fn test_welcome_document_disabled() {
        let config = EditorConfig {
            welcome_document: false,
            ..EditorConfig::default()
        };
        let session = EditorSession::open(MemoryStore::new(), config).unwrap();
        assert_eq!(session.text(), "");
    }

    #[test]
    fn test_set_text_saves_on_change_only() {
        let mut session = EditorSession::open(MemoryStore::with_text("# A"), EditorConfig::default()).unwrap();

        assert!(session.set_text("# A\n## B").unwrap());
        assert!(!session.set_text("# A\n## B").unwrap());
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().saved(), Some("# A\n## B"));
    }

    #[test]
    fn test_clear() {
        let mut session = EditorSession::open(MemoryStore::with_text("# A"), EditorConfig::default()).unwrap();
        assert!(session.clear().unwrap());
        assert_eq!(session.store().saved(), Some(""));
        assert!(session.outline().is_empty());
    }

    #[test]
    fn test_rejected_saves_are_reported() {
        let mut session = EditorSession::open(ReadOnlyStore, EditorConfig::default()).unwrap();
        assert_eq!(session.text(), WELCOME_DOCUMENT);

        let err = session.set_text("# New").unwrap_err();
        assert!(matches!(err, EditorError::Storage(_)));
        assert_eq!(session.text(), "# New");
    }

    #[test]
    fn test_failed_load_does_not_overwrite_store() {
        let mut store = UnreadableStore::default();
        let failed = matches!(
            EditorSession::open(&mut store, EditorConfig::default()),
            Err(EditorError::Storage(_))
        );

        assert!(failed);
        assert!(store.saves.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EditorConfig {
            storage_key: String::new(),
            ..EditorConfig::default()
        };
        assert!(EditorSession::open(MemoryStore::new(), config).is_err());
    }

    #[test]
    fn test_export_uses_configured_basename() {
        let config = EditorConfig {
            export_basename: "notes".to_string(),
            ..EditorConfig::default()
        };
        let session = EditorSession::open(MemoryStore::with_text("# X"), config).unwrap();
        let file = session.export(ExportFormat::Markdown);
        assert_eq!(file.file_name, "notes.md");
        assert_eq!(file.contents, "# X");
    }
}
