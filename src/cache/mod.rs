//! Cache Module
//!
//! Provides the local feed cache: the store contract, its file-backed
//! implementation, the expiration policy, and the loader orchestrating them.

mod file_store;
mod loader;
mod policy;
mod store;


// Re-export public types
pub use file_store::FileStore;
pub use loader::LocalFeedLoader;
pub use policy::FeedCachePolicy;
pub use store::{CachedFeed, FeedStore, RetrievedCachedFeed};
