//! Fetch driver: issues the next page request when the feed wants one

use crate::error::FetchError;
use crate::feed::{FeedAction, FeedState};
use crate::page::{PageRequest, PhotoPage};
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error};

/// Source of paginated photos.
///
/// `?Send` because the browser implementation runs on the single UI thread.
#[async_trait(?Send)]
pub trait PhotoSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PhotoPage, FetchError>;
}

/// Owner of the feed state.
///
/// The driver only touches the state through short `update` calls so it never
/// holds a borrow across the network await.
pub trait FeedHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut FeedState) -> R) -> R;
}

impl FeedHandle for Rc<RefCell<FeedState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FeedState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// What a call to [`fetch_next_page`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nothing pending, or a request was already in flight
    Skipped,
    /// The page was fetched and applied
    Loaded { page: u32, received: usize },
    /// The request failed and the feed is stalled
    Failed { page: u32 },
}

/// Request the pending page, if any, and apply the result to the feed.
///
/// Failures are logged and recorded on the feed; nothing is retried.
pub async fn fetch_next_page<S, H>(source: &S, mut feed: H) -> FetchOutcome
where
    S: PhotoSource + ?Sized,
    H: FeedHandle,
{
    let Some(request) = feed.update(|state| state.begin_fetch()) else {
        return FetchOutcome::Skipped;
    };

    debug!(
        "Requesting photos page {} (limit {})",
        request.page, request.limit
    );

    match source.fetch_page(request).await {
        Ok(page) => {
            let received = page.photos.len();
            feed.update(|state| {
                state.apply(FeedAction::BatchReceived {
                    photos: page.photos,
                    total_count: page.total_count,
                })
            });
            FetchOutcome::Loaded {
                page: request.page,
                received,
            }
        }
        Err(e) => {
            error!("Failed to fetch photos page {}: {}", request.page, e);
            feed.update(|state| state.apply(FeedAction::FetchFailed { error: e }));
            FetchOutcome::Failed { page: request.page }
        }
    }
}
