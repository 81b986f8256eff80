//! Cache Module
//!
//! Provides an in-memory key-value store with per-entry TTL expiry.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_secs, CacheEntry, EntrySnapshot};
pub use shared::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default TTL in seconds applied when no configuration is given
pub const DEFAULT_TTL_SECS: u64 = 1;
