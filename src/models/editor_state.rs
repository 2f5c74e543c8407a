//! Editor state management
//!
//! This module contains the EditorState struct: the document text together
//! with everything derived from it (outline, visibility subscription, active
//! heading). This is the WASM-owned source of truth for the navigation panel.

use crate::navigation::{ActiveHeadingTracker, ScrollRequest, Subscription, ViewportBand, VisibilityEvent};
use crate::outline::{extract_outline, Outline};

/// Document text plus derived navigation state
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    text: String,
    outline: Outline,
    tracker: ActiveHeadingTracker,
    /// Bumped on every text change
    version: u64,
}

impl EditorState {
    /// Create a state for `text` with the default viewport band
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_band(text, ViewportBand::default())
    }

    pub fn with_band(text: impl Into<String>, band: ViewportBand) -> Self {
        let text = text.into();
        let outline = extract_outline(&text);
        let mut tracker = ActiveHeadingTracker::new(band);
        tracker.observe(&outline);

        Self {
            text,
            outline,
            tracker,
            version: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscription(&self) -> &Subscription {
        self.tracker.subscription()
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.tracker.active()
    }

    /// Replace the text and recompute the outline
    ///
    /// Returns false (and leaves the subscription alone) when the text is
    /// unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }

        self.text = text;
        self.outline = extract_outline(&self.text);
        self.version += 1;
        let generation = self.tracker.observe(&self.outline).generation;

        log::debug!(
            "outline recomputed: version {}, {} headings, generation {}",
            self.version,
            self.outline.len(),
            generation
        );
        true
    }

    /// Host visibility events; returns true when the active heading changed
    pub fn handle_visibility(&mut self, events: &[VisibilityEvent]) -> bool {
        self.tracker.handle_batch(events)
    }

    /// Navigation click on `slug`
    pub fn navigate_to(&mut self, slug: &str) -> ScrollRequest {
        if !self.outline.contains_slug(slug) {
            log::warn!("navigating to '{}' which is not in the current outline", slug);
        }
        self.tracker.select(slug)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(String::new())
    }
}
