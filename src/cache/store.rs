//! Cache Store Module
//!
//! The un-synchronized cache engine: a HashMap of entries plus the mutable
//! default TTL. Every method here assumes the caller already holds the
//! cache's guard; none of them takes a lock of its own, so they can call each
//! other freely without risking re-entrant acquisition.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{CacheEntry, CacheStats, EntrySnapshot};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Expiring key-value storage.
///
/// Expiry is lazy: an entry whose TTL has elapsed stays in the map, readable
/// and counted, until a sweep pass or an explicit removal takes it out.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// TTL in seconds assigned to newly inserted keys
    default_ttl: u64,
    /// Activity counters
    stats: CacheStats,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty CacheStore with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a key, or re-arms an existing one.
    ///
    /// If the key already exists, only its last-touched stamp is refreshed:
    /// the stored value and the entry's TTL are kept, and `value` is dropped.
    /// If the key is absent, the value is inserted with the current default
    /// TTL. Never fails.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.touch();
        } else {
            self.entries
                .insert(key, CacheEntry::new(value, self.default_ttl));
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expiry is not checked here: a key past its TTL that no sweep pass has
    /// removed yet still returns its value. Callers that cannot tolerate a
    /// stale read should consult `is_expired` first.
    pub fn get(&mut self, key: &K) -> Result<V> {
        if let Some(entry) = self.entries.get(key) {
            let value = entry.value.clone();
            self.stats.record_hit();
            Ok(value)
        } else {
            self.stats.record_miss();
            Err(CacheError::NotFound)
        }
    }

    // == Remove ==
    /// Removes an entry by key.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.stats.set_total_entries(self.entries.len());
            Ok(())
        } else {
            Err(CacheError::NotFound)
        }
    }

    // == Set TTL ==
    /// Re-arms the TTL of a single key.
    ///
    /// An already-expired key is deleted instead of re-armed. A live key gets
    /// the new TTL without its last-touched stamp moving. An absent key is a
    /// silent no-op.
    pub fn set_ttl(&mut self, key: &K, ttl_secs: u64) -> Result<()> {
        if ttl_secs == 0 {
            return Err(CacheError::InvalidConfiguration(
                "ttl must be a positive number of seconds".to_string(),
            ));
        }

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return Ok(()),
        };

        if expired {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
        } else if let Some(entry) = self.entries.get_mut(key) {
            entry.ttl_secs = ttl_secs;
        }
        Ok(())
    }

    // == Is Expired ==
    /// Checks whether a key's TTL has elapsed.
    pub fn is_expired(&self, key: &K) -> Result<bool> {
        self.entries
            .get(key)
            .map(CacheEntry::is_expired)
            .ok_or(CacheError::NotFound)
    }

    // == Default TTL ==
    /// Returns the TTL currently assigned to new inserts.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Changes the TTL assigned to new inserts.
    ///
    /// Existing entries keep the TTL they were inserted with.
    pub fn set_default_ttl(&mut self, ttl_secs: u64) -> Result<()> {
        if ttl_secs == 0 {
            return Err(CacheError::InvalidConfiguration(
                "default_ttl must be a positive number of seconds".to_string(),
            ));
        }
        self.default_ttl = ttl_secs;
        Ok(())
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// A key that vanished between the scan and its removal is skipped;
    /// the pass continues with the rest. Returns the number of entries
    /// actually removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let mut removed = 0;
        for key in expired_keys {
            if self.entries.remove(&key).is_some() {
                removed += 1;
            }
        }

        self.stats.record_swept(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Dump ==
    /// Returns an owned snapshot of every entry for diagnostics.
    ///
    /// The snapshot is a copy taken under the guard; mutating it has no
    /// effect on the cache.
    pub fn dump(&self) -> Vec<EntrySnapshot<K, V>> {
        self.entries
            .iter()
            .map(|(key, entry)| EntrySnapshot {
                key: key.clone(),
                value: entry.value.clone(),
                ttl_secs: entry.ttl_secs,
                last_touched: entry.last_touched,
            })
            .collect()
    }

    // == Stats ==
    /// Returns current activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of entries in the map, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
