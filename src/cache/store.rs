//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction
//! and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, InsertionOrder, SystemClock};

// == TTL Cache ==
/// Bounded key-value cache with per-entry expiry.
///
/// When full, inserting a new key evicts the entry inserted earliest. Expired
/// entries are dropped lazily on access or eagerly by [`cleanup`](Self::cleanup).
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order, for eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL for entries stored without an explicit one
    default_ttl: Duration,
    clock: C,
}

impl<V: Clone> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache on wall-clock time.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries (at least 1)
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_size: max_size.max(1),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores a value, expiring after `ttl` (or the default TTL).
    ///
    /// Overwriting a held key replaces its value and expiry but keeps its
    /// place in the eviction order. It never evicts, even at capacity, since
    /// the size does not grow. Only a new key arriving at capacity evicts the
    /// earliest inserted entry.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(value, now, ttl.unwrap_or(self.default_ttl));

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        if self.entries.len() >= self.max_size {
            if let Some(evicted) = self.order.pop_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted earliest inserted entry");
            }
        }

        self.order.push(&key);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Returns a clone of the live value under `key`.
    ///
    /// Absent and expired keys count as misses; an expired entry is removed.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.remove_entry(key);
                self.stats.record_miss();
                debug!(key, "cache entry expired");
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Returns true if `key` holds a live value. Does not touch the hit and
    /// miss counters; an expired entry is removed.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => true,
            Some(_) => {
                self.remove_entry(key);
                false
            }
            None => false,
        }
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Cleanup ==
    /// Removes every expired entry and returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        expired_keys.len()
    }

    // == Clear ==
    /// Removes all entries and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::new();
    }

    // == Stats ==
    /// Returns a snapshot of the counters and current size.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    /// Remaining lifetime of a live entry, without counting as a lookup.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_at(now))
    }

    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }
}
