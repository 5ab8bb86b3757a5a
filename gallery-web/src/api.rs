use async_trait::async_trait;
use gallery_common::{
    decode_page, FetchError, GalleryConfig, PageRequest, PhotoPage, PhotoSource,
    TOTAL_COUNT_HEADER,
};
use reqwest::Client;

/// Photos endpoint reached over HTTP
#[derive(Clone)]
pub struct HttpPhotoSource {
    client: Client,
    photos_url: String,
}

impl HttpPhotoSource {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            client: Client::new(),
            photos_url: config.photos_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl PhotoSource for HttpPhotoSource {
    /// `GET {photos_url}?_limit=N&_page=P`, total from `x-total-count`
    async fn fetch_page(&self, request: PageRequest) -> Result<PhotoPage, FetchError> {
        let resp = self
            .client
            .get(&self.photos_url)
            .query(&request.query())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let total_header = resp
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode_page(status, total_header.as_deref(), &body)
    }
}
