use crate::Route;
use dioxus::prelude::*;
use gallery_ui::AppLayoutView;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        AppLayoutView { title: "Photos", Outlet::<Route> {} }
    }
}
