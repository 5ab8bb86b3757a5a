//! Photo card component - pure view

use dioxus::prelude::*;
use gallery_common::Photo;

/// Labeled thumbnail for a single photo
#[component]
pub fn PhotoCard(photo: Photo) -> Element {
    rsx! {
        div { class: "photo-card", "data-testid": "photo-card",
            p { class: "photo-title", title: "{photo.title}", "{photo.title}" }
            img {
                class: "photo-thumbnail",
                src: "{photo.thumbnail_url}",
                alt: "{photo.title}",
                loading: "lazy",
            }
        }
    }
}
