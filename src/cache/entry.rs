//! Cache entry type.

use chrono::{DateTime, Duration, Utc};

/// Longest accepted TTL (ten years).
const MAX_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// A memoized value and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Wrap `value` so it stays live for `ttl_seconds`.
    pub fn new(value: V, ttl_seconds: u64) -> Self {
        let ttl = i64::try_from(ttl_seconds)
            .unwrap_or(MAX_TTL_SECONDS)
            .min(MAX_TTL_SECONDS);

        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl),
        }
    }

    /// Whether the entry is past its expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether the entry would be expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
