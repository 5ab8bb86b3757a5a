//! Store types for UI state management

pub mod feed;

pub use feed::*;
