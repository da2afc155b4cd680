//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access metadata.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cached avatar together with its last access.
///
/// Eviction order is kept by the tracker; `updated_at` is informational.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (base64 image payload or placeholder path)
    pub value: String,
    /// Wall-clock time of the most recent read or write
    pub updated_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: String) -> Self {
        Self {
            value,
            updated_at: Utc::now(),
        }
    }

    // == Touch ==
    /// Marks the entry as accessed now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
