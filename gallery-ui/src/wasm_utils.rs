//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as it is attached. `Closure::forget()` leaks it and
//! leaves the listener attached forever, so instead the closure is owned by
//! [`DocumentEventListener`], which removes the listener in `Drop`:
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "scroll", callback);
//! // ...
//! drop(listener); // listener removed from the document
//! ```
//!
//! Combined with `gallery_common::ListenerSlot`, a component attaches one
//! listener on mount and removes it on unmount.

use gallery_common::ScrollMetrics;
use wasm_bindgen::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` to `event_name` on the document.
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document {} listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// The current document, if running in a browser window.
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Sample the document's scroll geometry.
///
/// Reads `documentElement.scrollHeight`, `documentElement.scrollTop` and
/// `window.innerHeight`.
pub fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    Some(ScrollMetrics {
        scroll_height: f64::from(root.scroll_height()),
        scroll_top: f64::from(root.scroll_top()),
        viewport_height,
    })
}
