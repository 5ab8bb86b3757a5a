use thiserror::Error;

/// Why a page of photos could not be loaded.
///
/// All variants are the same failure as far as the feed is concerned; the
/// split only exists so the log line says what went wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Failed to decode photos: {0}")]
    Decode(String),
    #[error("Response has no total count header")]
    MissingTotalCount,
    #[error("Invalid total count header: {0:?}")]
    InvalidTotalCount(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Photos URL must not be empty")]
    EmptyPhotosUrl,
    #[error("Page size must be at least 1")]
    ZeroPageSize,
    #[error("Bottom threshold must be a positive number of pixels, got {0}")]
    InvalidThreshold(f64),
}
