//! ProMark WASM API
//!
//! This module provides the JavaScript-facing API for the markdown editor.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, deserialization and error conversion
//! - `outline`: stateless functions (`slugify`, `extractOutline`, `headingAnchorId`)
//! - `editor`: the stateful `MarkdownEditor` class

pub mod editor;
pub mod helpers;
pub mod outline;

pub use editor::MarkdownEditor;
pub use outline::{extract_outline, heading_anchor_id, slugify};
