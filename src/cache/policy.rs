//! Cache Expiration Policy
//!
//! Pure decision logic for whether a cached feed is still fresh.

use chrono::{DateTime, Days, Utc};

// == Feed Cache Policy ==
/// Decides whether a stored timestamp is still valid relative to "now".
///
/// The maximum age is a fixed number of whole calendar days, added with real
/// calendar arithmetic rather than a flat seconds offset. No state, no I/O.
pub struct FeedCachePolicy;

impl FeedCachePolicy {
    /// Maximum cache age in calendar days.
    pub const MAX_CACHE_AGE_DAYS: u64 = 7;

    // == Validate ==
    /// Returns true while `against` is strictly before `timestamp` plus the
    /// maximum age.
    ///
    /// Boundary condition: a cache exactly `MAX_CACHE_AGE_DAYS` old is already
    /// invalid; a cache stamped at `against` itself is valid. If the expiry
    /// instant cannot be computed (calendar overflow) the policy fails closed
    /// and reports the timestamp as invalid.
    pub fn validate(timestamp: DateTime<Utc>, against: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(Self::MAX_CACHE_AGE_DAYS)) {
            Some(max_cache_age) => against < max_cache_age,
            None => false,
        }
    }
}
