//! ProMark WASM Module
//!
//! Core of the ProMark markdown editor: builds the navigable outline from raw
//! markdown, derives the heading slugs shared with the preview renderer, and
//! keeps the navigation panel's active-heading state.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod navigation;
pub mod outline;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use models::{EditorState, ExportFormat, ExportedFile};
pub use outline::{extract_outline, heading_anchor_id, slugify, Heading, HeadingLevel, Outline};
pub use session::EditorSession;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("ProMark WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
