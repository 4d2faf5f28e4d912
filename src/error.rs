//! Error types for the feed cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Every store failure is surfaced verbatim to the immediate caller; nothing
/// is retried internally.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Underlying file I/O failed (unreadable, unwritable, permission denied)
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted bytes exist but do not decode into the cache schema
    #[error("corrupt cache payload: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// A record could not be encoded for persistence
    #[error("cache encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The store's worker is gone; the operation was never executed
    #[error("store worker unavailable")]
    StoreUnavailable,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
