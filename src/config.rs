//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the single JSON file holding the cached feed
    pub store_path: PathBuf,
    /// Background cache validation interval in seconds
    pub validation_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_STORE_PATH` - Path of the cache file (default: movies_feed_cache.json)
    /// - `VALIDATION_INTERVAL` - Validation frequency in seconds (default: 3600)
    pub fn from_env() -> Self {
        Self {
            store_path: env::var("CACHE_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("movies_feed_cache.json")),
            validation_interval: env::var("VALIDATION_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("movies_feed_cache.json"),
            validation_interval: 3600,
        }
    }
}
