//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and insertion-order
//! eviction.

mod clock;
mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::TtlCache;
