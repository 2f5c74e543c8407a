//! DOM side of navigation: performing a `ScrollRequest`

use wasm_bindgen::prelude::*;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

use super::tracker::{ScrollBehavior, ScrollBlock, ScrollRequest};

/// Scroll the anchor element into view
///
/// Returns `Ok(false)` when no element carries the anchor id (the preview has
/// not rendered it yet); the optimistic highlight stays in place regardless.
pub fn perform_scroll(request: &ScrollRequest) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(element) = document.get_element_by_id(&request.anchor_id) else {
        log::debug!("anchor '{}' not rendered, skipping scroll", request.anchor_id);
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(match request.behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    options.set_block(match request.block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(true)
}
