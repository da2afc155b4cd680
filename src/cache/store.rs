//! LRU Cache Module
//!
//! Bounded string cache combining HashMap storage with a recency index.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// String-to-string cache holding at most `max_length` entries.
///
/// Reads count as use: `get_value` refreshes the entry exactly like a
/// rewrite of the same value would. When a new key arrives at capacity the
/// least recently used key is evicted first.
#[derive(Debug)]
pub struct LruCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Recency index
    lru: LruTracker,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_length: usize,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache. A capacity of zero is raised to one.
    pub fn new(max_length: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::default(),
            max_length: max_length.max(1),
        }
    }

    // == Has ==
    /// Returns true if `key` is stored. Does not count as a use.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Set ==
    /// Stores `value` under `key` and returns the resulting length.
    ///
    /// Eviction only happens when `key` is new and the cache is full;
    /// overwriting an existing key never evicts.
    pub fn set(&mut self, key: String, value: String) -> usize {
        let is_overwrite = self.has(&key);

        if !is_overwrite && self.entries.len() >= self.max_length {
            self.evict_least_recently_used();
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value));

        self.check_invariants();
        self.entries.len()
    }

    // == Lookup ==
    /// Checks the cache on behalf of a caller that will fetch on a miss.
    ///
    /// This is where hits and misses are counted. A hit refreshes recency
    /// and returns the value.
    pub fn lookup(&mut self, key: &str) -> Option<String> {
        if self.has(key) {
            self.stats.record_hit();
            self.get_value(key).ok()
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Get Value ==
    /// Returns the value stored under `key`, refreshing its recency.
    pub fn get_value(&mut self, key: &str) -> Result<String> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        self.lru.touch(key);
        entry.touch();
        Ok(entry.value.clone())
    }

    // == Get Values ==
    /// Reads every key in `keys`. All of them must already be present.
    ///
    /// Each occurrence refreshes recency, including duplicates, which
    /// collapse into a single map entry.
    pub fn get_values<I, K>(&mut self, keys: I) -> Result<HashMap<String, String>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut values = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            let value = self.get_value(key)?;
            values.insert(key.to_string(), value);
        }
        Ok(values)
    }

    // == Delete ==
    /// Removes `key` and returns the resulting length.
    pub fn delete(&mut self, key: &str) -> Result<usize> {
        if self.entries.remove(key).is_none() {
            return Err(CacheError::NotFound(key.to_string()));
        }
        self.lru.remove(key);

        self.check_invariants();
        Ok(self.entries.len())
    }

    // == Clear ==
    /// Removes every entry. Always returns 0.
    pub fn clear(&mut self) -> usize {
        self.entries.clear();
        self.lru.clear();
        0
    }

    // == Least Recently Used ==
    /// Key whose last read or write is the oldest, or None when empty.
    pub fn least_recently_used(&self) -> Option<String> {
        self.lru.peek_oldest().cloned()
    }

    fn evict_least_recently_used(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used avatar");
        }
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            capacity: self.max_length,
            ..self.stats.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_length
    }

    fn check_invariants(&self) {
        debug_assert_eq!(self.entries.len(), self.lru.len());
        debug_assert!(self.entries.len() <= self.max_length);
    }
}
