//! gallery-ui - View components and browser hooks for the photo gallery
//!
//! Components here are pure views driven by props. Browser interop (the
//! document scroll listener) lives in `wasm_utils` and the
//! `use_scroll_sentinel` hook.

pub mod components;
pub mod hooks;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use hooks::use_scroll_sentinel;
pub use stores::FeedSignal;
