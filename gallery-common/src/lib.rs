//! gallery-common - Paging, scroll and fetch logic for the photo gallery
//!
//! Everything here is free of I/O and UI framework types so it can be
//! driven from the browser and exercised on the host in tests.

pub mod config;
pub mod driver;
pub mod error;
pub mod feed;
pub mod page;
pub mod photo;
pub mod sentinel;

pub use config::GalleryConfig;
pub use driver::{fetch_next_page, FeedHandle, FetchOutcome, PhotoSource};
pub use error::{ConfigError, FetchError};
pub use feed::{FeedAction, FeedPhase, FeedState};
pub use page::{decode_page, parse_total_count, PageRequest, PhotoPage, TOTAL_COUNT_HEADER};
pub use photo::Photo;
pub use sentinel::{ListenerSlot, ScrollMetrics, ScrollSentinel};
