//! Expiring Cache - A process-local in-memory key-value store with TTL expiry
//!
//! Every entry carries a time-to-live and is evicted by a background sweeper
//! once expired. The cache is an embedded data structure, not a service:
//! there is no network surface, no persistence, and no memory-pressure
//! eviction, only absolute TTL expiry.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, EntrySnapshot, ExpiringCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
