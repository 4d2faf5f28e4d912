//! Cache Validation Task
//!
//! Background task that periodically validates the cached feed, purging it
//! when it has aged out or can no longer be read.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{FeedStore, LocalFeedLoader};

/// Spawns a background task that periodically runs cache validation.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between validation runs. Validation is best effort: read failures and
/// expired records trigger an eviction whose outcome is ignored.
///
/// # Arguments
/// * `loader` - Shared loader owning the store to validate
/// * `validation_interval_secs` - Interval in seconds between validation runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_validation_task<S>(
    loader: Arc<LocalFeedLoader<S>>,
    validation_interval_secs: u64,
) -> JoinHandle<()>
where
    S: FeedStore + 'static,
{
    let interval = Duration::from_secs(validation_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache validation task with interval of {} seconds",
            validation_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            loader.validate_cache().await;
            debug!("cache validation pass complete");
        }
    })
}
