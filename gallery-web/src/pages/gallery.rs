use crate::api::HttpPhotoSource;
use dioxus::prelude::*;
use gallery_common::{fetch_next_page, FeedState, FetchOutcome, GalleryConfig, ScrollSentinel};
use gallery_ui::{use_scroll_sentinel, FeedSignal, PhotoFeedView};
use tracing::debug;

/// Infinite-scroll photo gallery.
///
/// The feed signal is the only state. The scroll sentinel moves it to
/// `Pending`, the effect below notices and runs the fetch driver, and the
/// driver's single-slot claim keeps at most one request in flight.
#[component]
pub fn Gallery() -> Element {
    let config: GalleryConfig = use_context();
    let feed = use_signal(|| FeedState::new(config.page_size));
    let source = use_hook(|| HttpPhotoSource::new(&config));

    use_scroll_sentinel(feed, ScrollSentinel::new(config.bottom_threshold_px));

    use_effect(move || {
        if !feed.read().should_fetch() {
            return;
        }
        let source = source.clone();
        spawn(async move {
            let outcome = fetch_next_page(&source, FeedSignal::new(feed)).await;
            if outcome == FetchOutcome::Skipped {
                debug!("Fetch skipped, a request is already in flight");
            }
        });
    });

    rsx! {
        PhotoFeedView { feed }
    }
}
