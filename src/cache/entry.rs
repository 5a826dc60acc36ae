//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use crate::cache::clock::duration_ms;

// == Cache Entry ==
/// A stored value with its creation and expiry timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry at `now` that lives for `ttl`.
    pub fn new(value: V, now: u64, ttl: Duration) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(duration_ms(ttl)),
        }
    }

    // == Is Expired ==
    /// An entry is expired once `now` is strictly past `expires_at`; at the
    /// exact expiry millisecond it is still readable.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime at `now`, zero once expired.
    pub fn ttl_remaining_at(&self, now: u64) -> Duration {
        Duration::from_millis(self.expires_at.saturating_sub(now))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 1_000, Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.expires_at, 61_000);
        assert!(!entry.is_expired_at(1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(1u32, 0, Duration::from_millis(500));

        assert!(!entry.is_expired_at(499));
        assert!(!entry.is_expired_at(500), "Entry is readable at expiry instant");
        assert!(entry.is_expired_at(501));
    }

    #[test]
    fn test_zero_ttl() {
        let entry = CacheEntry::new((), 10, Duration::ZERO);
        assert!(!entry.is_expired_at(10));
        assert!(entry.is_expired_at(11));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("v", 0, Duration::from_secs(10));

        assert_eq!(entry.ttl_remaining_at(4_000), Duration::from_secs(6));
        assert_eq!(entry.ttl_remaining_at(20_000), Duration::ZERO);
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = CacheEntry::new("v", u64::MAX - 1, Duration::from_secs(1));
        assert_eq!(entry.expires_at, u64::MAX);
        assert!(!entry.is_expired_at(u64::MAX));
    }
}
