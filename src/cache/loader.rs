//! Local Feed Loader
//!
//! Business rules for saving, loading, and validating the cached feed.
//! Composes a [`FeedStore`], the [`FeedCachePolicy`], and an injectable clock;
//! correctness under concurrency relies entirely on the store's serialization
//! guarantee plus the single-record, full-replace data model.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cache::policy::FeedCachePolicy;
use crate::cache::store::{FeedStore, RetrievedCachedFeed};
use crate::error::{CacheError, Result};
use crate::models::{CacheMoviesPage, MoviesPage, MoviesPageLoader};

/// Injectable source of "now", sampled once per public operation at the point
/// of use so each save/load/validate decision rests on one consistent instant.
pub type CurrentDate = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

// == Local Feed Loader ==
pub struct LocalFeedLoader<S> {
    store: Arc<S>,
    current_date: CurrentDate,
}

impl<S: FeedStore> LocalFeedLoader<S> {
    // == Constructors ==
    /// Creates a loader over `store` using the system clock.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_current_date(store, Arc::new(Utc::now))
    }

    /// Creates a loader with an explicit clock, for deterministic expiry
    /// decisions in tests.
    pub fn with_current_date(store: Arc<S>, current_date: CurrentDate) -> Self {
        Self {
            store,
            current_date,
        }
    }

    // == Save ==
    /// Replaces the cached feed with `movies_page`, stamped with the current
    /// instant.
    ///
    /// Deletes the old cache first and only inserts once the deletion
    /// succeeded, so stale and new data never coexist. A retrieval landing
    /// between the two steps observes a completely empty cache; the store's
    /// serial lane makes that window well ordered.
    pub async fn save(&self, movies_page: &MoviesPage) -> Result<()> {
        self.store.delete_cached_feed().await?;
        self.store
            .insert(CacheMoviesPage::from(movies_page), (self.current_date)())
            .await
    }

    // == Load ==
    /// Delivers the cached feed page, or the empty page when the cache holds
    /// nothing or holds an expired record.
    ///
    /// Loading never evicts: an expired record is left in place and only
    /// [`Self::validate_cache`] purges it. A failed retrieval is reported as
    /// an error, not downgraded to the empty page.
    pub async fn load(&self) -> Result<MoviesPage> {
        match self.store.retrieve().await? {
            RetrievedCachedFeed::Found(cached)
                if FeedCachePolicy::validate(cached.timestamp, (self.current_date)()) =>
            {
                Ok(cached.movies_page.into())
            }
            RetrievedCachedFeed::Found(_) | RetrievedCachedFeed::Empty => Ok(MoviesPage::empty()),
        }
    }

    // == Validate Cache ==
    /// Fire-and-forget maintenance hook: evicts the cached feed when it is
    /// unreadable or expired. The eviction is best effort and its own outcome
    /// is deliberately discarded.
    pub async fn validate_cache(&self) {
        match self.store.retrieve().await {
            Err(error) => {
                debug!(%error, "evicting unreadable cache");
                let _ = self.store.delete_cached_feed().await;
            }
            Ok(RetrievedCachedFeed::Found(cached))
                if !FeedCachePolicy::validate(cached.timestamp, (self.current_date)()) =>
            {
                debug!(timestamp = %cached.timestamp, "evicting expired cache");
                let _ = self.store.delete_cached_feed().await;
            }
            Ok(_) => {}
        }
    }
}

#[async_trait]
impl<S: FeedStore> MoviesPageLoader for LocalFeedLoader<S> {
    type Error = CacheError;

    async fn load_page(&self) -> Result<MoviesPage> {
        self.load().await
    }
}
