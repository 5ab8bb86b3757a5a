//! Scroll proximity detection

use crate::config::BOTTOM_THRESHOLD_PX;
use crate::feed::FeedState;

/// Scroll geometry sampled at event time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Full scrollable height of the document
    pub scroll_height: f64,
    /// Current vertical scroll offset
    pub scroll_top: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Pixels between the bottom edge of the viewport and the end of the document
    pub fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - (self.scroll_top + self.viewport_height)
    }
}

/// Decides when a scroll position warrants loading the next page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSentinel {
    pub threshold_px: f64,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self {
            threshold_px: BOTTOM_THRESHOLD_PX,
        }
    }
}

impl ScrollSentinel {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn is_near_bottom(&self, metrics: &ScrollMetrics) -> bool {
        metrics.distance_to_bottom() < self.threshold_px
    }

    /// Near the bottom and the server has photos we have not loaded.
    pub fn should_request_more(&self, metrics: &ScrollMetrics, feed: &FeedState) -> bool {
        self.is_near_bottom(metrics) && feed.has_more()
    }
}

/// Holds at most one listener guard.
///
/// Attaching while a guard is held is a no-op, and detaching drops the guard,
/// so a view that attaches on mount and detaches on unmount owns exactly one
/// listener for its lifetime.
#[derive(Debug)]
pub struct ListenerSlot<G> {
    guard: Option<G>,
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<G> ListenerSlot<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener built by `make` unless one is already held.
    /// Returns whether `make` was called.
    pub fn attach(&mut self, make: impl FnOnce() -> G) -> bool {
        if self.guard.is_some() {
            return false;
        }
        self.guard = Some(make());
        true
    }

    /// Drop the held listener, if any. Returns whether one was dropped.
    pub fn detach(&mut self) -> bool {
        self.guard.take().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }
}
