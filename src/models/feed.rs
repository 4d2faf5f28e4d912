//! Domain values for the paginated movies feed.

use async_trait::async_trait;

// == Movie ==
/// A single feed item. Immutable value, equality by structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

// == Movies Page ==
/// One page of the movies feed.
///
/// `page` and `total_pages` are at least 1; `results` keeps the feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviesPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_results: u32,
    pub total_pages: u32,
}

impl MoviesPage {
    pub fn new(page: u32, results: Vec<Movie>, total_results: u32, total_pages: u32) -> Self {
        Self {
            page,
            results,
            total_results,
            total_pages,
        }
    }

    /// The page delivered when the cache holds nothing usable.
    ///
    /// Absence and expiry are both normalized to this value instead of an
    /// error; callers always receive a well-formed page.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_results: 1,
            total_pages: 1,
        }
    }
}

// == Movies Page Loader ==
/// Capability of anything that can produce a feed page: the local cache here,
/// or the remote fetch pipeline living outside this crate.
#[async_trait]
pub trait MoviesPageLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn load_page(&self) -> Result<MoviesPage, Self::Error>;
}
