//! Navigation panel state
//!
//! Decoupled from the outline computation: the outline only supplies the
//! anchor ids, the host reports which of them crossed the viewport band.
//!
//! - `visibility`: viewport band, subscriptions and host events
//! - `tracker`: active heading and optimistic click handling
//! - `scroll`: executes scroll requests against the DOM

pub mod scroll;
pub mod tracker;
pub mod visibility;

pub use tracker::{ActiveHeadingTracker, ScrollBehavior, ScrollBlock, ScrollRequest};
pub use visibility::{Subscription, ViewportBand, VisibilityChange, VisibilityEvent};
