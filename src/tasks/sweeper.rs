//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that sweeps expired entries out of a store.
///
/// One pass runs immediately on spawn; after that the task alternates
/// between sleeping for `sweep_interval_secs` and sweeping. Each pass takes
/// the write guard for the duration of the scan, so it serializes with every
/// other cache operation, and a pass that has started always runs to
/// completion. The shutdown channel is the cache's private stop signal: when
/// it fires during the sleep, the task exits without sweeping again, and no
/// other task in the process is affected.
///
/// # Arguments
/// * `store` - shared reference to the guarded store
/// * `sweep_interval_secs` - seconds between sweep passes
/// * `shutdown` - watch receiver signalled by `ExpiringCache::stop`
///
/// # Returns
/// The JoinHandle for the spawned task, awaited by `stop` to join cleanly.
pub fn spawn_sweeper_task<K, V>(
    store: Arc<RwLock<CacheStore<K, V>>>,
    sweep_interval_secs: u64,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweeper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sweep under the write guard, then report the pass
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Sweep pass removed {} expired entries", removed);
            } else {
                debug!("Sweep pass found no expired entries");
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {
                    info!("TTL sweeper stopping");
                    break;
                }
            }
        }
    })
}
