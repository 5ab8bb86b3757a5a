//! Gallery configuration

use crate::error::ConfigError;
use serde::Deserialize;

/// Endpoint serving the paginated photo list
pub const PHOTOS_URL: &str = "https://jsonplaceholder.typicode.com/photos";
/// Photos requested per page
pub const PAGE_SIZE: u32 = 10;
/// Distance from the bottom of the document, in pixels, that counts as "near"
pub const BOTTOM_THRESHOLD_PX: f64 = 200.0;

/// Settings for the photo feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Endpoint queried with `_limit` and `_page`
    pub photos_url: String,
    /// Number of photos per request
    pub page_size: u32,
    /// Scroll distance from the bottom that triggers the next page
    pub bottom_threshold_px: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_url: PHOTOS_URL.to_string(),
            page_size: PAGE_SIZE,
            bottom_threshold_px: BOTTOM_THRESHOLD_PX,
        }
    }
}

impl GalleryConfig {
    pub fn with_photos_url(mut self, url: impl Into<String>) -> Self {
        self.photos_url = url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_bottom_threshold(mut self, px: f64) -> Self {
        self.bottom_threshold_px = px;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photos_url.trim().is_empty() {
            return Err(ConfigError::EmptyPhotosUrl);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.bottom_threshold_px.is_finite() || self.bottom_threshold_px <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.bottom_threshold_px));
        }
        Ok(())
    }
}
