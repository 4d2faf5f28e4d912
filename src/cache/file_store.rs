//! File-Backed Feed Store
//!
//! Durable single-file JSON persistence with strict operation ordering.
//!
//! All operations are funneled through one worker task per store instance
//! (FIFO, one operation in flight at a time), so interleaved inserts, deletes
//! and retrievals from multiple callers observe effects in exactly the order
//! they were submitted. The worker keeps draining its queue after a failed
//! operation; no failure is retried.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::cache::store::{CachedFeed, FeedStore, RetrievedCachedFeed};
use crate::error::{CacheError, Result};
use crate::models::{CacheMovie, CacheMoviesPage};

// == Store Requests ==
enum StoreRequest {
    Delete {
        reply: oneshot::Sender<Result<()>>,
    },
    Insert {
        movies_page: CacheMoviesPage,
        timestamp: DateTime<Utc>,
        reply: oneshot::Sender<Result<()>>,
    },
    Retrieve {
        reply: oneshot::Sender<Result<RetrievedCachedFeed>>,
    },
}

impl std::fmt::Debug for StoreRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreRequest::Delete { .. } => f.write_str("Delete"),
            StoreRequest::Insert { .. } => f.write_str("Insert"),
            StoreRequest::Retrieve { .. } => f.write_str("Retrieve"),
        }
    }
}

// == File Store ==
/// Concrete [`FeedStore`] backed by a single JSON file.
///
/// Must be created inside a Tokio runtime: construction spawns the worker
/// task owning the file. Cloning yields another handle to the same serial
/// lane. The worker exits once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct FileStore {
    requests: mpsc::UnboundedSender<StoreRequest>,
}

impl FileStore {
    // == Constructor ==
    /// Creates a store persisting to `store_path` and spawns its worker task.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();
        let (requests, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_store_worker(store_path, queue));
        Self { requests }
    }

    fn submit<T>(
        &self,
        make_request: impl FnOnce(oneshot::Sender<Result<T>>) -> StoreRequest,
    ) -> oneshot::Receiver<Result<T>> {
        let (reply, receiver) = oneshot::channel();
        // A closed channel is reported through the receiver below.
        let _ = self.requests.send(make_request(reply));
        receiver
    }
}

#[async_trait]
impl FeedStore for FileStore {
    async fn delete_cached_feed(&self) -> Result<()> {
        self.submit(|reply| StoreRequest::Delete { reply })
            .await
            .map_err(|_| CacheError::StoreUnavailable)?
    }

    async fn insert(&self, movies_page: CacheMoviesPage, timestamp: DateTime<Utc>) -> Result<()> {
        self.submit(|reply| StoreRequest::Insert {
            movies_page,
            timestamp,
            reply,
        })
        .await
        .map_err(|_| CacheError::StoreUnavailable)?
    }

    async fn retrieve(&self) -> Result<RetrievedCachedFeed> {
        self.submit(|reply| StoreRequest::Retrieve { reply })
            .await
            .map_err(|_| CacheError::StoreUnavailable)?
    }
}

// == Worker ==
/// Processes queued requests one at a time, in submission order.
///
/// Replies whose caller has been dropped are discarded silently; the
/// operation itself still runs to completion.
async fn run_store_worker(store_path: PathBuf, mut queue: mpsc::UnboundedReceiver<StoreRequest>) {
    debug!(path = %store_path.display(), "feed store worker started");

    while let Some(request) = queue.recv().await {
        debug!(?request, "processing store request");
        match request {
            StoreRequest::Delete { reply } => {
                let result = delete_file(&store_path).await;
                if let Err(error) = &result {
                    warn!(%error, "cache deletion failed");
                }
                let _ = reply.send(result);
            }
            StoreRequest::Insert {
                movies_page,
                timestamp,
                reply,
            } => {
                let result = write_record(&store_path, movies_page, timestamp).await;
                if let Err(error) = &result {
                    warn!(%error, "cache insertion failed");
                }
                let _ = reply.send(result);
            }
            StoreRequest::Retrieve { reply } => {
                let _ = reply.send(read_record(&store_path).await);
            }
        }
    }

    debug!(path = %store_path.display(), "feed store worker stopped");
}

async fn delete_file(store_path: &Path) -> Result<()> {
    match fs::remove_file(store_path).await {
        Ok(()) => Ok(()),
        // Deleting an empty cache is a no-op success
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}

/// Writes the whole record to a sibling temp file, then renames it into
/// place, so a concurrent reader never observes a half-written cache.
async fn write_record(
    store_path: &Path,
    movies_page: CacheMoviesPage,
    timestamp: DateTime<Utc>,
) -> Result<()> {
    let record = OnDiskCache {
        movies_page: movies_page.into(),
        timestamp,
    };
    let bytes = serde_json::to_vec(&record).map_err(CacheError::Encoding)?;

    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let staging_path = store_path.with_extension("tmp");
    fs::write(&staging_path, &bytes).await?;
    fs::rename(&staging_path, store_path).await?;
    Ok(())
}

async fn read_record(store_path: &Path) -> Result<RetrievedCachedFeed> {
    let bytes = match fs::read(store_path).await {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Ok(RetrievedCachedFeed::Empty)
        }
        Err(error) => return Err(error.into()),
    };

    let record: OnDiskCache = serde_json::from_slice(&bytes).map_err(CacheError::Corrupt)?;
    Ok(RetrievedCachedFeed::Found(CachedFeed {
        movies_page: record.movies_page.into(),
        timestamp: record.timestamp,
    }))
}

// == On-Disk Schema ==
// Private serde mirror of the cache representation. Field names here are the
// stable on-disk contract and stay fixed even if the in-memory types change.

#[derive(Debug, Serialize, Deserialize)]
struct OnDiskCache {
    #[serde(rename = "moviesPage")]
    movies_page: OnDiskMoviesPage,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OnDiskMoviesPage {
    page: u32,
    results: Vec<OnDiskMovie>,
    total_results: u32,
    total_pages: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct OnDiskMovie {
    id: u64,
    title: String,
}

impl From<CacheMoviesPage> for OnDiskMoviesPage {
    fn from(page: CacheMoviesPage) -> Self {
        Self {
            page: page.page,
            results: page
                .results
                .into_iter()
                .map(|movie| OnDiskMovie {
                    id: movie.id,
                    title: movie.title,
                })
                .collect(),
            total_results: page.total_results,
            total_pages: page.total_pages,
        }
    }
}

impl From<OnDiskMoviesPage> for CacheMoviesPage {
    fn from(page: OnDiskMoviesPage) -> Self {
        Self {
            page: page.page,
            results: page
                .results
                .into_iter()
                .map(|movie| CacheMovie {
                    id: movie.id,
                    title: movie.title,
                })
                .collect(),
            total_results: page.total_results,
            total_pages: page.total_pages,
        }
    }
}
