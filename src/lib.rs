//! Feed Cache - local persistence for a paginated movies feed
//!
//! Caches a remotely fetched movies feed in a single JSON file so repeated
//! reads need no network access, and expires the cache after a fixed age.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::{
    CachedFeed, FeedCachePolicy, FeedStore, FileStore, LocalFeedLoader, RetrievedCachedFeed,
};
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::{Movie, MoviesPage, MoviesPageLoader};
pub use tasks::spawn_validation_task;
