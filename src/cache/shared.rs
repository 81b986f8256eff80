//! Shared Cache Handle
//!
//! The public, thread-safe face of the cache: an explicitly constructed
//! instance owning the guarded store and its background sweeper. There is no
//! global singleton; embedders create as many independent caches as they
//! need and each one owns exactly its own sweeper task.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore, EntrySnapshot};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_sweeper_task;

// == Expiring Cache ==
/// An in-memory key-value cache whose entries expire after a TTL.
///
/// All operations serialize through a single guard; single-key operations
/// hold it for O(1), the sweeper's pass for O(map size). Expiry is lazy:
/// `get` can return a value whose TTL has elapsed until the next sweep pass
/// removes it (see [`ExpiringCache::get`]).
///
/// Must be constructed inside a tokio runtime, since construction spawns the
/// sweeper task. Call [`ExpiringCache::stop`] before discarding the cache to
/// join the sweeper cleanly; if the cache is dropped without `stop`, the
/// sweeper is aborted so it cannot keep running against a dead cache.
#[derive(Debug)]
pub struct ExpiringCache<K, V> {
    /// Guarded store; the write lock is the mutual-exclusion guard
    store: Arc<RwLock<CacheStore<K, V>>>,
    /// Sweep period, frozen at construction time
    sweep_interval_secs: u64,
    /// Shutdown signal for this cache's sweeper, and nothing else's
    shutdown: watch::Sender<bool>,
    /// Sweeper task handle, taken by `stop`
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates the cache and starts its sweeper.
    ///
    /// The sweep interval is frozen here to the configured default TTL;
    /// later `set_default_ttl` calls change only the TTL given to new
    /// inserts, never the sweep period.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the config fails validation.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        let sweep_interval_secs = config.default_ttl;
        let store = Arc::new(RwLock::new(CacheStore::new(config.default_ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = spawn_sweeper_task(Arc::clone(&store), sweep_interval_secs, shutdown_rx);

        Ok(Self {
            store,
            sweep_interval_secs,
            shutdown,
            sweeper: Mutex::new(Some(handle)),
        })
    }

    /// Creates the cache with the default configuration (1 second TTL).
    pub fn with_defaults() -> Result<Self> {
        Self::new(CacheConfig::default())
    }

    // == Set ==
    /// Stores a key, or re-arms an existing one.
    ///
    /// Re-setting a key that is already present refreshes only its
    /// last-touched stamp: the stored value and the entry's TTL stay as they
    /// were. A new key is inserted with the current default TTL.
    pub async fn set(&self, key: K, value: V) {
        self.store.write().await.set(key, value);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Lazy expiry: a key past its TTL that the sweeper has not removed yet
    /// still returns its value. Check [`ExpiringCache::is_expired`] first if
    /// a stale read is unacceptable.
    ///
    /// # Errors
    /// Returns `NotFound` if the key is absent.
    pub async fn get(&self, key: &K) -> Result<V> {
        self.store.write().await.get(key)
    }

    // == Remove ==
    /// Removes an entry by key.
    ///
    /// # Errors
    /// Returns `NotFound` if the key is absent.
    pub async fn remove(&self, key: &K) -> Result<()> {
        self.store.write().await.remove(key)
    }

    // == Set TTL ==
    /// Re-arms the TTL of a single key.
    ///
    /// An already-expired key is deleted instead. A live key gets the new
    /// TTL with its last-touched stamp unchanged. An absent key is a silent
    /// no-op.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `ttl_secs` is zero.
    pub async fn set_ttl(&self, key: &K, ttl_secs: u64) -> Result<()> {
        self.store.write().await.set_ttl(key, ttl_secs)
    }

    // == Is Expired ==
    /// Checks whether a key's TTL has elapsed.
    ///
    /// # Errors
    /// Returns `NotFound` if the key is absent.
    pub async fn is_expired(&self, key: &K) -> Result<bool> {
        self.store.read().await.is_expired(key)
    }

    // == Default TTL ==
    /// Returns the TTL currently assigned to new inserts.
    pub async fn default_ttl(&self) -> u64 {
        self.store.read().await.default_ttl()
    }

    /// Changes the TTL assigned to new inserts.
    ///
    /// Existing entries keep their TTL, and the sweep interval stays at the
    /// value frozen during construction.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `ttl_secs` is zero.
    pub async fn set_default_ttl(&self, ttl_secs: u64) -> Result<()> {
        self.store.write().await.set_default_ttl(ttl_secs)
    }

    // == Sweep Interval ==
    /// Returns the sweep period in seconds, fixed at construction time.
    pub fn sweep_interval(&self) -> u64 {
        self.sweep_interval_secs
    }

    // == Length ==
    /// Returns the number of entries in the map.
    ///
    /// Logically-expired entries that no sweep pass has removed yet are
    /// included in the count.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Dump ==
    /// Returns an owned snapshot of every entry for diagnostics.
    ///
    /// The snapshot is taken under the guard and copied out; it never
    /// aliases the live map.
    pub async fn dump(&self) -> Vec<EntrySnapshot<K, V>> {
        self.store.read().await.dump()
    }

    // == Stats ==
    /// Returns current activity counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Stop ==
    /// Halts the sweeper and waits for it to finish.
    ///
    /// Only this cache's task is signalled; a sweep pass already in progress
    /// runs to completion before the task exits. After `stop`, expired keys
    /// persist in the map until removed explicitly. Calling `stop` a second
    /// time is a no-op.
    pub async fn stop(&self) {
        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            let _ = self.shutdown.send(true);
            let _ = handle.await;
        }
    }
}

impl<K, V> Drop for ExpiringCache<K, V> {
    fn drop(&mut self) {
        // If stop() was never called, cut the sweeper loose rather than
        // leave a task ticking forever.
        if let Ok(mut guard) = self.sweeper.try_lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}
