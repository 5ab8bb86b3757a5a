//! Feed state held in a Dioxus signal

use dioxus::prelude::*;
use gallery_common::{FeedHandle, FeedState};

/// Signal-backed [`FeedHandle`] so the fetch driver can update the view's
/// feed from a spawned task.
#[derive(Clone, Copy)]
pub struct FeedSignal(Signal<FeedState>);

impl FeedSignal {
    pub fn new(signal: Signal<FeedState>) -> Self {
        Self(signal)
    }
}

impl FeedHandle for FeedSignal {
    fn update<R>(&mut self, f: impl FnOnce(&mut FeedState) -> R) -> R {
        f(&mut self.0.write())
    }
}
