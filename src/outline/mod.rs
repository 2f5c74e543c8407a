//! Outline core
//!
//! Turns raw markdown text into the navigable table of contents shown next to
//! the preview. This module has no knowledge of rendering, storage or the DOM.
//!
//! ## Modules
//!
//! - `heading`: `Heading`, `HeadingLevel` and `Outline` data types
//! - `slug`: heading text → anchor identifier, shared with the renderer
//! - `extractor`: line scanner that builds an `Outline` from text
//! - `whitespace`: the browser's whitespace and line-terminator classes

pub mod extractor;
pub mod heading;
pub mod slug;
mod whitespace;

// Re-exports for convenience
pub use extractor::extract_outline;
pub use heading::{Heading, HeadingLevel, Outline};
pub use slug::{heading_anchor_id, slugify};
