//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached item: the payload plus its expiry bookkeeping.
///
/// Timestamps use integer second resolution, so an entry with `ttl_secs = 1`
/// expires somewhere between one and two wall-clock seconds after its last
/// touch.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Seconds this entry survives since its last touch
    pub ttl_secs: u64,
    /// Unix timestamp (seconds) of creation or the most recent re-set
    pub last_touched: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V, ttl_secs: u64) -> Self {
        Self {
            value,
            ttl_secs,
            last_touched: current_timestamp_secs(),
        }
    }

    // == Touch ==
    /// Refreshes the last-touched stamp to now, pushing expiry forward.
    pub fn touch(&mut self) {
        self.last_touched = current_timestamp_secs();
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has fully elapsed.
    ///
    /// Boundary condition: the entry is expired once the current time is
    /// greater than or equal to `last_touched + ttl_secs`.
    pub fn is_expired(&self) -> bool {
        current_timestamp_secs().saturating_sub(self.last_touched) >= self.ttl_secs
    }

    // == Expires At ==
    /// Returns the Unix timestamp (seconds) at which this entry expires.
    pub fn expires_at(&self) -> u64 {
        self.last_touched + self.ttl_secs
    }

    // == Remaining ==
    /// Returns seconds until expiry, or 0 if the entry has already expired.
    ///
    /// Useful for diagnostics; the cache itself only ever asks `is_expired`.
    pub fn remaining_secs(&self) -> u64 {
        self.expires_at().saturating_sub(current_timestamp_secs())
    }
}

// == Entry Snapshot ==
/// An owned copy of one entry, as returned by the diagnostic dump.
///
/// The dump hands out snapshots rather than references so callers can never
/// reach the live map behind the cache's guard.
#[derive(Debug, Clone)]
pub struct EntrySnapshot<K, V> {
    pub key: K,
    pub value: V,
    pub ttl_secs: u64,
    pub last_touched: u64,
}

// == Utility Functions ==
/// Returns the current Unix timestamp in whole seconds.
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
