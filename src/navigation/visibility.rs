//! Visibility subscriptions
//!
//! The host (an `IntersectionObserver` in the browser) watches heading anchors
//! and reports enter/exit events back to us. Each subscription carries a
//! generation; recomputing the outline starts a new generation, which is how
//! observers of replaced elements are retired.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Horizontal slice of the viewport where a heading counts as "in view"
///
/// Insets are fractions of the viewport height. The defaults put the band
/// between 20% from the top and 60% from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_inset: 0.2,
            bottom_inset: 0.6,
        }
    }
}

impl ViewportBand {
    pub fn new(top_inset: f64, bottom_inset: f64) -> Result<Self> {
        let band = Self { top_inset, bottom_inset };
        band.validate()?;
        Ok(band)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..1.0).contains(&v);
        if !in_range(self.top_inset) || !in_range(self.bottom_inset) {
            return Err(EditorError::InvalidConfig(format!(
                "viewport insets must be in [0, 1), got top {} bottom {}",
                self.top_inset, self.bottom_inset
            )));
        }
        if self.top_inset + self.bottom_inset >= 1.0 {
            return Err(EditorError::InvalidConfig(format!(
                "viewport insets leave no visible band (top {} + bottom {} >= 1)",
                self.top_inset, self.bottom_inset
            )));
        }
        Ok(())
    }

    /// `rootMargin` string for an `IntersectionObserver`
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_inset),
            percent(self.bottom_inset)
        )
    }

    /// Band edges in pixels for a viewport of `viewport_height`
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let top = viewport_height * self.top_inset;
        let bottom = viewport_height * (1.0 - self.bottom_inset);
        (top, bottom)
    }

    /// Whether an element spanning `[top, bottom]` (viewport coordinates)
    /// touches the band. Zero threshold: touching an edge counts.
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport_height);
        top <= band_bottom && bottom >= band_top
    }
}

fn percent(fraction: f64) -> String {
    let value = (fraction * 100.0 * 1000.0).round() / 1000.0;
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Enter/exit transition reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityChange {
    Enter,
    Exit,
}

/// One observation of a heading anchor crossing the band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEvent {
    pub generation: u64,
    pub anchor_id: String,
    pub change: VisibilityChange,
}

impl VisibilityEvent {
    pub fn enter(generation: u64, anchor_id: impl Into<String>) -> Self {
        Self {
            generation,
            anchor_id: anchor_id.into(),
            change: VisibilityChange::Enter,
        }
    }

    pub fn exit(generation: u64, anchor_id: impl Into<String>) -> Self {
        Self {
            generation,
            anchor_id: anchor_id.into(),
            change: VisibilityChange::Exit,
        }
    }
}

/// What the host should observe for the current outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub generation: u64,
    /// Distinct anchor ids in document order
    pub anchor_ids: Vec<String>,
    pub root_margin: String,
}

impl Subscription {
    pub fn watches(&self, anchor_id: &str) -> bool {
        self.anchor_ids.iter().any(|id| id == anchor_id)
    }
}
