use crate::error::FetchError;
use crate::photo::Photo;

/// Response header carrying the total number of photos across all pages
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// One page to request from the photos endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Query pairs in the order the endpoint expects: `_limit`, then `_page`
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("_limit", self.limit.to_string()),
            ("_page", self.page.to_string()),
        ]
    }
}

/// A decoded page of photos plus the server's running total
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoPage {
    pub photos: Vec<Photo>,
    pub total_count: usize,
}

/// Parse the `x-total-count` header value.
///
/// Surrounding whitespace is tolerated; anything other than a non-negative
/// decimal integer is rejected.
pub fn parse_total_count(value: Option<&str>) -> Result<usize, FetchError> {
    let raw = value.ok_or(FetchError::MissingTotalCount)?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| FetchError::InvalidTotalCount(raw.to_string()))
}

/// Turn a raw photos response into a page.
///
/// Checked in order: a non-2xx `status`, then the total count header, then
/// the JSON body.
pub fn decode_page(
    status: u16,
    total_header: Option<&str>,
    body: &[u8],
) -> Result<PhotoPage, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    let total_count = parse_total_count(total_header)?;
    let photos: Vec<Photo> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(PhotoPage {
        photos,
        total_count,
    })
}
