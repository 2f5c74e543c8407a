//! Active-heading tracking
//!
//! Highlights the outline entry whose anchor most recently entered the
//! viewport band. Clicking an entry activates it immediately, ahead of the
//! scroll-driven confirmation.

use serde::{Deserialize, Serialize};

use super::visibility::{Subscription, ViewportBand, VisibilityChange, VisibilityEvent};
use crate::outline::Outline;

/// Scroll the host should perform after a navigation click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub anchor_id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Vertical alignment of the anchor after scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
}

impl ScrollRequest {
    /// Smooth scroll bringing the anchor to the top of the viewport
    pub fn to_top(anchor_id: impl Into<String>) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }
    }
}

/// Active heading state plus the current visibility subscription
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveHeadingTracker {
    band: ViewportBand,
    subscription: Subscription,
    active: Option<String>,
}

impl ActiveHeadingTracker {
    pub fn new(band: ViewportBand) -> Self {
        Self {
            band,
            subscription: Subscription {
                generation: 0,
                anchor_ids: Vec::new(),
                root_margin: band.root_margin(),
            },
            active: None,
        }
    }

    /// Stop the current subscription and watch the anchors of `outline`
    ///
    /// The active slug is left alone: it stays highlighted until another
    /// anchor enters the band.
    pub fn observe(&mut self, outline: &Outline) -> &Subscription {
        self.subscription = Subscription {
            generation: self.subscription.generation + 1,
            anchor_ids: outline.unique_slugs(),
            root_margin: self.band.root_margin(),
        };
        &self.subscription
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    pub fn band(&self) -> ViewportBand {
        self.band
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Apply one host event; returns true when the active slug changed
    pub fn handle(&mut self, event: &VisibilityEvent) -> bool {
        if event.generation != self.subscription.generation {
            log::warn!(
                "dropping visibility event for '{}' from stale generation {} (current {})",
                event.anchor_id,
                event.generation,
                self.subscription.generation
            );
            return false;
        }

        if event.change == VisibilityChange::Exit || !self.subscription.watches(&event.anchor_id) {
            return false;
        }

        self.set_active(&event.anchor_id)
    }

    /// Apply a batch of events in order; the last entering anchor wins
    pub fn handle_batch<'a, I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = &'a VisibilityEvent>,
    {
        events
            .into_iter()
            .fold(false, |changed, event| self.handle(event) || changed)
    }

    /// Optimistically activate `slug` and describe the scroll to perform
    pub fn select(&mut self, slug: &str) -> ScrollRequest {
        self.set_active(slug);
        ScrollRequest::to_top(slug)
    }

    fn set_active(&mut self, slug: &str) -> bool {
        if self.active.as_deref() == Some(slug) {
            return false;
        }
        self.active = Some(slug.to_string());
        true
    }
}

impl Default for ActiveHeadingTracker {
    fn default() -> Self {
        Self::new(ViewportBand::default())
    }
}
