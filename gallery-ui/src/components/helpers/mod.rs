//! Common helper UI components

mod end_of_feed;
mod loading_spinner;

pub use end_of_feed::EndOfFeed;
pub use loading_spinner::LoadingSpinner;
