//! Browser `localStorage` store

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::DocumentStore;
use crate::error::{EditorError, Result};

/// Keeps the document under one `localStorage` key
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window().ok_or_else(|| EditorError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| storage_error("localStorage access denied", &e))?
            .ok_or_else(|| EditorError::Storage("localStorage unavailable".to_string()))
    }
}

impl DocumentStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| storage_error("getItem failed", &e))
    }

    fn save(&mut self, text: &str) -> Result<()> {
        self.storage()?
            .set_item(&self.key, text)
            .map_err(|e| storage_error("setItem failed", &e))
    }
}

fn storage_error(context: &str, value: &JsValue) -> EditorError {
    EditorError::Storage(format!("{}: {:?}", context, value))
}
