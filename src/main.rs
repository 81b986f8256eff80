//! Cache Demo - driver loop exercising the expiring cache
//!
//! Populates a cache at a steady cadence while doubling the default TTL
//! partway through, then dumps the surviving entries and stops the sweeper.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expiring_cache::{CacheConfig, ExpiringCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expiring_cache=info,cache_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting expiring cache demo");

    let config = CacheConfig::new(2);
    let cache: ExpiringCache<u32, u32> = ExpiringCache::new(config)?;
    info!(
        "Cache created: default_ttl={}s, sweep_interval={}s",
        cache.default_ttl().await,
        cache.sweep_interval()
    );

    for i in 0..100u32 {
        cache.set(i, i * 2).await;

        if i % 50 == 0 {
            let doubled = cache.default_ttl().await * 2;
            cache.set_default_ttl(doubled).await?;
            info!("Default TTL raised to {}s", doubled);
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let stats = cache.stats().await;
    info!(
        "Demo loop done: {} entries survive, {} swept so far",
        stats.total_entries, stats.swept
    );

    for snapshot in cache.dump().await {
        info!(
            "{}: value={} ttl={}s last_touched={}",
            snapshot.key, snapshot.value, snapshot.ttl_secs, snapshot.last_touched
        );
    }

    cache.stop().await;
    info!("Sweeper stopped, demo complete");

    Ok(())
}
