//! Infinite photo list - pure view
//!
//! Accepts `ReadSignal<FeedState>` and reads the photos in place, so a
//! render never copies or compares the whole list.

use crate::components::helpers::{EndOfFeed, LoadingSpinner};
use crate::components::photo_card::PhotoCard;
use dioxus::prelude::*;
use gallery_common::{FeedPhase, FeedState};

/// Renders loaded photos in order, keyed by id.
///
/// A spinner follows the list while a page is wanted or in flight and a
/// footer once the feed is exhausted. A stalled feed renders nothing extra.
#[component]
pub fn PhotoFeedView(feed: ReadSignal<FeedState>) -> Element {
    let state = feed.read();
    let footer = match state.phase() {
        FeedPhase::Pending | FeedPhase::Fetching { .. } => rsx! {
            LoadingSpinner { message: "Loading photos..." }
        },
        FeedPhase::Done => rsx! {
            EndOfFeed { count: state.len() }
        },
        FeedPhase::Idle | FeedPhase::Stalled => rsx! {},
    };

    let view = rsx! {
        div { class: "photo-feed", "data-testid": "photo-feed",
            for photo in state.photos().iter() {
                PhotoCard { key: "{photo.id}", photo: photo.clone() }
            }
            {footer}
        }
    };
    drop(state);
    view
}
