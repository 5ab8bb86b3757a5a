//! Paging state for the photo feed
//!
//! The feed is one value moved between phases by [`FeedAction`]s and the
//! [`FeedState::begin_fetch`] claim. Only one page request can be in flight:
//! a request is claimed by moving `Pending` to `Fetching`, and every other
//! phase refuses the claim.

use crate::config::PAGE_SIZE;
use crate::error::FetchError;
use crate::page::PageRequest;
use crate::photo::Photo;
use tracing::{info, warn};

/// Where the feed is in its fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// A page is wanted but no request has been issued yet
    Pending,
    /// A request for `page` is in flight
    Fetching { page: u32 },
    /// Nothing wanted right now; more photos may remain
    Idle,
    /// Every photo the server reported has been loaded
    Done,
    /// The last request failed and nothing will re-issue it
    Stalled,
}

/// Transitions accepted by [`FeedState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// The user scrolled close to the end of the list
    MoreRequested,
    /// The in-flight request returned a page
    BatchReceived {
        photos: Vec<Photo>,
        total_count: usize,
    },
    /// The in-flight request failed
    FetchFailed { error: FetchError },
}

/// Accumulated photos plus paging bookkeeping
///
/// `total_count` follows the latest server report but never drops below the
/// number of photos already loaded, so `len() <= total_count()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    photos: Vec<Photo>,
    next_page: u32,
    total_count: usize,
    page_size: u32,
    phase: FeedPhase,
    last_error: Option<FetchError>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl FeedState {
    /// Fresh feed: no photos, page 1, total 0, first page wanted.
    pub fn new(page_size: u32) -> Self {
        Self {
            photos: Vec::new(),
            next_page: 1,
            total_count: 0,
            page_size,
            phase: FeedPhase::Pending,
            last_error: None,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// True when a page is wanted and not yet requested.
    pub fn should_fetch(&self) -> bool {
        self.phase == FeedPhase::Pending
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, FeedPhase::Fetching { .. })
    }

    pub fn has_more(&self) -> bool {
        self.photos.len() < self.total_count
    }

    /// Claim the single request slot.
    ///
    /// Moves `Pending` to `Fetching` and returns the page to request. Any
    /// other phase returns `None`, so a second caller can never issue a
    /// duplicate request for the same page.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.phase != FeedPhase::Pending {
            return None;
        }
        let page = self.next_page;
        self.phase = FeedPhase::Fetching { page };
        Some(PageRequest {
            page,
            limit: self.page_size,
        })
    }

    /// Apply an action. Returns whether the state changed.
    pub fn apply(&mut self, action: FeedAction) -> bool {
        match action {
            FeedAction::MoreRequested => {
                if self.phase == FeedPhase::Idle && self.has_more() {
                    self.phase = FeedPhase::Pending;
                    true
                } else {
                    false
                }
            }
            FeedAction::BatchReceived {
                mut photos,
                total_count,
            } => {
                let FeedPhase::Fetching { page } = self.phase else {
                    warn!(
                        "Ignoring batch of {} photos received in phase {:?}",
                        photos.len(),
                        self.phase
                    );
                    return false;
                };

                let room = total_count.saturating_sub(self.photos.len());
                if photos.len() > room {
                    warn!(
                        "Page {} overshoots total count {} by {}, dropping the excess",
                        page,
                        total_count,
                        photos.len() - room
                    );
                    photos.truncate(room);
                }

                info!(
                    "Page {} loaded: {} photos ({} of {})",
                    page,
                    photos.len(),
                    self.photos.len() + photos.len(),
                    total_count
                );

                self.photos.extend(photos);
                self.next_page += 1;
                if total_count < self.photos.len() {
                    warn!(
                        "Page {} reports total count {} below the {} photos already loaded, keeping {}",
                        page,
                        total_count,
                        self.photos.len(),
                        self.photos.len()
                    );
                }
                self.total_count = total_count.max(self.photos.len());
                self.last_error = None;
                self.phase = if self.has_more() {
                    FeedPhase::Idle
                } else {
                    FeedPhase::Done
                };
                true
            }
            FeedAction::FetchFailed { error } => {
                if !self.is_fetching() {
                    warn!("Ignoring fetch failure in phase {:?}: {}", self.phase, error);
                    return false;
                }
                self.last_error = Some(error);
                self.phase = FeedPhase::Stalled;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u64) -> Photo {
        Photo {
            album_id: 1,
            id,
            title: format!("photo {id}"),
            url: format!("https://example.test/600/{id}"),
            thumbnail_url: format!("https://example.test/150/{id}"),
        }
    }

    fn batch(ids: std::ops::Range<u64>) -> Vec<Photo> {
        ids.map(photo).collect()
    }

    #[test]
    fn test_initial_state() {
        let feed = FeedState::default();
        assert!(feed.is_empty());
        assert_eq!(feed.next_page(), 1);
        assert_eq!(feed.total_count(), 0);
        assert_eq!(feed.page_size(), 10);
        assert!(feed.should_fetch());
    }

    #[test]
    fn test_begin_fetch_claims_once() {
        let mut feed = FeedState::new(10);
        assert_eq!(feed.begin_fetch(), Some(PageRequest { page: 1, limit: 10 }));
        assert_eq!(feed.phase(), FeedPhase::Fetching { page: 1 });
        assert_eq!(feed.begin_fetch(), None);
    }

    #[test]
    fn test_batch_appends_and_advances() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        assert!(feed.apply(FeedAction::BatchReceived {
            photos: batch(1..11),
            total_count: 25,
        }));
        assert_eq!(feed.len(), 10);
        assert_eq!(feed.next_page(), 2);
        assert_eq!(feed.total_count(), 25);
        assert_eq!(feed.phase(), FeedPhase::Idle);
        assert!(!feed.should_fetch());
    }

    #[test]
    fn test_more_requested_only_from_idle_with_more_left() {
        let mut feed = FeedState::new(10);
        // Pending already wants a page
        assert!(!feed.apply(FeedAction::MoreRequested));

        feed.begin_fetch();
        assert!(!feed.apply(FeedAction::MoreRequested));

        feed.apply(FeedAction::BatchReceived {
            photos: batch(1..11),
            total_count: 20,
        });
        assert!(feed.apply(FeedAction::MoreRequested));
        assert!(feed.should_fetch());
    }

    #[test]
    fn test_last_page_finishes_feed() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        feed.apply(FeedAction::BatchReceived {
            photos: batch(1..6),
            total_count: 5,
        });
        assert_eq!(feed.phase(), FeedPhase::Done);
        assert!(!feed.apply(FeedAction::MoreRequested));
    }

    #[test]
    fn test_empty_collection_is_done() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        feed.apply(FeedAction::BatchReceived {
            photos: vec![],
            total_count: 0,
        });
        assert_eq!(feed.phase(), FeedPhase::Done);
        assert_eq!(feed.next_page(), 2);
    }

    #[test]
    fn test_overshoot_is_truncated() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        feed.apply(FeedAction::BatchReceived {
            photos: batch(1..11),
            total_count: 4,
        });
        assert_eq!(feed.len(), 4);
        assert_eq!(feed.photos().last().map(|p| p.id), Some(4));
        assert_eq!(feed.phase(), FeedPhase::Done);
    }

    #[test]
    fn test_shrinking_total_never_drops_below_loaded() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        feed.apply(FeedAction::BatchReceived {
            photos: batch(1..11),
            total_count: 25,
        });
        assert!(feed.apply(FeedAction::MoreRequested));
        feed.begin_fetch();
        feed.apply(FeedAction::BatchReceived {
            photos: batch(11..21),
            total_count: 5,
        });

        assert_eq!(feed.len(), 10);
        assert_eq!(feed.total_count(), 10);
        assert_eq!(feed.next_page(), 3);
        assert_eq!(feed.phase(), FeedPhase::Done);
    }

    #[test]
    fn test_stale_batch_is_ignored() {
        let mut feed = FeedState::new(10);
        assert!(!feed.apply(FeedAction::BatchReceived {
            photos: batch(1..11),
            total_count: 25,
        }));
        assert!(feed.is_empty());
        assert_eq!(feed.next_page(), 1);
    }

    #[test]
    fn test_failure_stalls_without_advancing() {
        let mut feed = FeedState::new(10);
        feed.begin_fetch();
        assert!(feed.apply(FeedAction::FetchFailed {
            error: FetchError::Status(503),
        }));
        assert_eq!(feed.phase(), FeedPhase::Stalled);
        assert_eq!(feed.next_page(), 1);
        assert_eq!(feed.last_error(), Some(&FetchError::Status(503)));
        assert!(!feed.apply(FeedAction::MoreRequested));
        assert_eq!(feed.begin_fetch(), None);
    }

    #[test]
    fn test_failure_outside_fetch_is_ignored() {
        let mut feed = FeedState::new(10);
        assert!(!feed.apply(FeedAction::FetchFailed {
            error: FetchError::MissingTotalCount,
        }));
        assert_eq!(feed.phase(), FeedPhase::Pending);
    }
}
