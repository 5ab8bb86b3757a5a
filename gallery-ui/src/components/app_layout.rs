//! App layout view

use dioxus::prelude::*;

/// Page shell: a title bar above the routed content
#[component]
pub fn AppLayoutView(title: String, children: Element) -> Element {
    rsx! {
        div { class: "app-layout",
            header { class: "title-bar",
                h1 { class: "title-bar-heading", "{title}" }
            }
            main { class: "app-content", {children} }
        }
    }
}
