use async_trait::async_trait;
use gallery_common::{FetchError, PageRequest, Photo, PhotoPage, PhotoSource};
use std::cell::RefCell;
use std::collections::HashSet;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// In-memory photo endpoint serving `total` photos with sequential ids.
///
/// Every request yields to the executor once before answering so callers
/// observe a real in-flight window.
pub struct ScriptedSource {
    total: usize,
    failing_pages: HashSet<u32>,
    requests: RefCell<Vec<PageRequest>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            failing_pages: HashSet::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.borrow().iter().map(|r| r.page).collect()
    }
}

pub fn photo(id: u64) -> Photo {
    Photo {
        album_id: (id - 1) / 50 + 1,
        id,
        title: format!("photo {id}"),
        url: format!("https://example.test/600/{id}"),
        thumbnail_url: format!("https://example.test/150/{id}"),
    }
}

#[async_trait(?Send)]
impl PhotoSource for ScriptedSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PhotoPage, FetchError> {
        self.requests.borrow_mut().push(request);
        tokio::task::yield_now().await;

        if self.failing_pages.contains(&request.page) {
            return Err(FetchError::Network("connection reset".to_string()));
        }

        let start = (request.page as usize - 1) * request.limit as usize;
        let end = (start + request.limit as usize).min(self.total);
        let photos = (start..end).map(|i| photo(i as u64 + 1)).collect();

        Ok(PhotoPage {
            photos,
            total_count: self.total,
        })
    }
}
