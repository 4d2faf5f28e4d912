//! Feed Cache maintenance runner
//!
//! Keeps a movies-feed cache file healthy: runs the background validation
//! task against the configured store so expired or unreadable records do not
//! linger.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the file store and loader
//! 4. Start the background cache validation task
//! 5. Handle graceful shutdown on SIGINT/SIGTERM

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feed_cache::{spawn_validation_task, Config, FileStore, LocalFeedLoader};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feed_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting feed cache maintenance runner");

    let config = Config::from_env();
    info!(
        "Configuration loaded: store_path={}, validation_interval={}s",
        config.store_path.display(),
        config.validation_interval
    );

    let store = Arc::new(FileStore::new(config.store_path));
    let loader = Arc::new(LocalFeedLoader::new(store));
    info!("Feed store initialized");

    // One immediate pass, then the periodic task takes over
    loader.validate_cache().await;
    let validation_handle = spawn_validation_task(Arc::clone(&loader), config.validation_interval);
    info!("Background validation task started");

    shutdown_signal(validation_handle).await;

    info!("Shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the validation task.
async fn shutdown_signal(validation_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    validation_handle.abort();
    warn!("Validation task aborted");
}
