//! Cache Module
//!
//! In-memory avatar cache with least-recently-used eviction.

use std::sync::Arc;

use tokio::sync::RwLock;

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::LruCache;

/// The cache instance shared by every request handler.
pub type SharedCache = Arc<RwLock<LruCache>>;

// == Public Constants ==
/// Default number of avatars kept in memory
pub const DEFAULT_MAX_ENTRIES: usize = 1000;
