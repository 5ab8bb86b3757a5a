use dioxus::prelude::*;

/// Footer shown once every photo has been loaded
#[component]
pub fn EndOfFeed(count: usize) -> Element {
    rsx! {
        p { class: "end-of-feed", "data-testid": "end-of-feed", "All {count} photos loaded" }
    }
}
