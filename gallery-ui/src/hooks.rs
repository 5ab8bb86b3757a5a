//! Hooks binding browser events to gallery state

use crate::wasm_utils::DocumentEventListener;
use dioxus::prelude::*;
use gallery_common::{FeedState, ListenerSlot, ScrollSentinel};
use std::cell::RefCell;
use std::rc::Rc;

/// Request the next page when the user scrolls near the bottom.
///
/// Attaches one document `scroll` listener when the calling component mounts
/// and removes it when the component is dropped. The listener reads `feed`
/// at event time, so state changes never require re-registering it.
pub fn use_scroll_sentinel(feed: Signal<FeedState>, sentinel: ScrollSentinel) {
    let slot: Rc<RefCell<ListenerSlot<DocumentEventListener>>> =
        use_hook(|| Rc::new(RefCell::new(ListenerSlot::new())));

    #[cfg(target_arch = "wasm32")]
    {
        use gallery_common::FeedAction;

        if !slot.borrow().is_attached() {
            if let Some(document) = crate::wasm_utils::document() {
                let mut feed = feed;
                slot.borrow_mut().attach(move || {
                    tracing::debug!("Attaching scroll sentinel");
                    DocumentEventListener::new(document, "scroll", move |_| {
                        let Some(metrics) = crate::wasm_utils::read_scroll_metrics() else {
                            return;
                        };
                        if sentinel.should_request_more(&metrics, &feed.peek()) {
                            feed.write().apply(FeedAction::MoreRequested);
                        }
                    })
                });
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (feed, sentinel);

    use_drop(move || {
        if slot.borrow_mut().detach() {
            tracing::debug!("Detached scroll sentinel");
        }
    });
}
