//! Loading spinner component

use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "spinner-row", "data-testid": "loading-spinner",
            div { class: "spinner" }
            p { class: "spinner-message", "{message}" }
        }
    }
}
