//! Stateless outline functions for JavaScript
//!
//! `slugify` and `headingAnchorId` are what the preview renderer calls when it
//! stamps ids on `h1`..`h3`; `extractOutline` is what a stateless consumer of
//! the table of contents calls.

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::outline;

/// Heading text → anchor id
#[wasm_bindgen]
pub fn slugify(text: &str) -> String {
    outline::slugify(text)
}

/// Outline of `text` as an array of `{ level, text, slug, line }`
#[wasm_bindgen(js_name = extractOutline)]
pub fn extract_outline(text: &str) -> Result<JsValue, JsValue> {
    let outline = outline::extract_outline(text);
    serialize(&outline, "Failed to serialize outline")
}

/// Anchor id for a rendered heading element, `undefined` below `h3`
#[wasm_bindgen(js_name = headingAnchorId)]
pub fn heading_anchor_id(level: u8, text_content: &str) -> Option<String> {
    outline::heading_anchor_id(level, text_content)
}
