//! Shared UI components

pub mod app_layout;
pub mod helpers;
pub mod photo_card;
pub mod photo_feed;

pub use app_layout::AppLayoutView;
pub use helpers::{EndOfFeed, LoadingSpinner};
pub use photo_card::PhotoCard;
pub use photo_feed::PhotoFeedView;
