use dioxus::prelude::*;
use gallery_common::GalleryConfig;
use gallery_web::App;
use tracing::{error, info};

fn configure_logging() {
    // Only fails if a subscriber is already installed
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

fn main() {
    configure_logging();

    let config = GalleryConfig::default();
    if let Err(e) = config.validate() {
        error!("Invalid gallery configuration: {}", e);
        return;
    }
    info!(
        "Starting gallery against {} ({} per page)",
        config.photos_url, config.page_size
    );

    LaunchBuilder::web()
        .with_context_provider(move || Box::new(config.clone()))
        .launch(App);
}
