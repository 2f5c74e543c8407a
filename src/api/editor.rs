//! `MarkdownEditor` class for JavaScript
//!
//! Owns an editor session backed by `localStorage`. Every mutator returns the
//! freshly computed outline so the navigation panel can re-render in one
//! round trip; after a mutation the host should re-read `subscription()` and
//! re-register its observers.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::config::EditorConfig;
use crate::models::ExportFormat;
use crate::navigation::scroll::perform_scroll;
use crate::navigation::{VisibilityChange, VisibilityEvent};
use crate::session::EditorSession;
use crate::storage::LocalStorageStore;

#[wasm_bindgen]
pub struct MarkdownEditor {
    session: EditorSession<LocalStorageStore>,
}

#[wasm_bindgen]
impl MarkdownEditor {
    /// Open the editor; `config` is an optional `EditorConfig` object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MarkdownEditor, JsValue> {
        let config: EditorConfig = deserialize_or_default(config, "Invalid editor config")?;
        let store = LocalStorageStore::new(config.storage_key.clone());
        let session = EditorSession::open(store, config).map_err(|e| to_js_error(e, "Failed to open editor"))?;
        Ok(MarkdownEditor { session })
    }

    pub fn text(&self) -> String {
        self.session.text().to_string()
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: String) -> Result<JsValue, JsValue> {
        self.session
            .set_text(text)
            .map_err(|e| to_js_error(e, "Failed to save document"))?;
        self.outline()
    }

    /// Replace the document with an uploaded file's contents
    pub fn upload(&mut self, contents: String) -> Result<JsValue, JsValue> {
        self.session
            .upload(contents)
            .map_err(|e| to_js_error(e, "Failed to save uploaded document"))?;
        self.outline()
    }

    pub fn clear(&mut self) -> Result<JsValue, JsValue> {
        self.session
            .clear()
            .map_err(|e| to_js_error(e, "Failed to save cleared document"))?;
        self.outline()
    }

    pub fn outline(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.outline(), "Failed to serialize outline")
    }

    /// `{ generation, anchorIds, rootMargin }` for the current outline
    pub fn subscription(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.subscription(), "Failed to serialize subscription")
    }

    #[wasm_bindgen(js_name = activeSlug)]
    pub fn active_slug(&self) -> Option<String> {
        self.session.active_slug().map(str::to_string)
    }

    /// Report an observer entry; returns true when the highlight moved
    ///
    /// `generation` is the one from the subscription the observer was
    /// registered for.
    #[wasm_bindgen(js_name = handleVisibility)]
    pub fn handle_visibility(&mut self, generation: u32, anchor_id: String, entering: bool) -> bool {
        let change = if entering {
            VisibilityChange::Enter
        } else {
            VisibilityChange::Exit
        };
        let event = VisibilityEvent {
            generation: u64::from(generation),
            anchor_id,
            change,
        };
        self.session.handle_visibility(std::slice::from_ref(&event))
    }

    /// Highlight `slug` right away, then smooth-scroll its anchor to the top
    ///
    /// Returns whether the anchor element was found in the page.
    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&mut self, slug: &str) -> Result<bool, JsValue> {
        let request = self.session.navigate_to(slug);
        perform_scroll(&request)
    }

    /// `{ fileName, mimeType, contents }` for `"md"` or `"txt"`
    #[wasm_bindgen(js_name = exportFile)]
    pub fn export_file(&self, format: &str) -> Result<JsValue, JsValue> {
        let format: ExportFormat = format
            .parse()
            .map_err(|e| to_js_error(e, "Failed to export document"))?;
        serialize(&self.session.export(format), "Failed to serialize export")
    }
}
