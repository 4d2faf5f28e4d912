//! Feed Store Contract
//!
//! Capability contract for persisting a single cached feed snapshot.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::CacheMoviesPage;

// == Cached Feed ==
/// The sole unit of persisted state: one feed page in cache representation
/// plus the instant it was stored. Inserting replaces any existing record
/// wholesale; there is no partial mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    pub movies_page: CacheMoviesPage,
    pub timestamp: DateTime<Utc>,
}

// == Retrieved Cached Feed ==
/// Outcome of a retrieval when the store itself did not fail.
///
/// Unreadable or unparseable state is reported through the `Err` side of the
/// surrounding `Result`, so a retrieval is three-way: empty, found, or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievedCachedFeed {
    Empty,
    Found(CachedFeed),
}

// == Feed Store Trait ==
/// Asynchronous store for at most one [`CachedFeed`].
///
/// Every operation resolves exactly once. Resolution may happen on any
/// executor thread; callers must not assume same-thread delivery.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Removes the stored record if present. Succeeds when nothing was stored.
    async fn delete_cached_feed(&self) -> Result<()>;

    /// Atomically replaces any existing record. On failure the previous state
    /// is left unchanged, or the error tells the caller the cache can no
    /// longer be trusted.
    async fn insert(&self, movies_page: CacheMoviesPage, timestamp: DateTime<Utc>) -> Result<()>;

    /// Reads back the stored record, [`RetrievedCachedFeed::Empty`] when
    /// nothing is stored, or an error when persisted state exists but cannot
    /// be read or parsed.
    async fn retrieve(&self) -> Result<RetrievedCachedFeed>;
}
