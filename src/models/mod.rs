//! Domain and cache-representation models for the movies feed
//!
//! The domain types carry no serde derives on purpose: the on-disk schema is
//! owned by the store and decoupled from these shapes through the cache
//! representation in [`cached`].

pub mod cached;
pub mod feed;

// Re-export commonly used types
pub use cached::{CacheMovie, CacheMoviesPage};
pub use feed::{Movie, MoviesPage, MoviesPageLoader};
