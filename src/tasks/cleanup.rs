//! Cache Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, TtlCache};

/// Spawns a task that calls [`TtlCache::cleanup`] every `interval`.
///
/// The sweep takes the write lock only for the duration of one cleanup, so it
/// runs between other cache operations and never interrupts one.
///
/// # Returns
/// A JoinHandle for the spawned task. Abort it at shutdown to stop the timer.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(TtlCache::<String>::new(100, Duration::from_secs(300))));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V, C>(
    cache: Arc<RwLock<TtlCache<V, C>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {:?}",
            interval
        );

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn shared_cache(clock: &ManualClock) -> Arc<RwLock<TtlCache<String, ManualClock>>> {
        Arc::new(RwLock::new(TtlCache::with_clock(
            100,
            Duration::from_secs(300),
            clock.clone(),
        )))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);

        cache
            .write()
            .await
            .set("expire_soon", "value".to_string(), Some(Duration::from_secs(1)));
        clock.advance(Duration::from_secs(5));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(150)).await;

        // Removed by the sweep, not by a lookup
        assert_eq!(cache.read().await.len(), 0);
        assert_eq!(cache.read().await.stats().misses, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);

        cache
            .write()
            .await
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut cache_guard = cache.write().await;
        assert_eq!(cache_guard.get("long_lived"), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let clock = ManualClock::new(0);
        let handle = spawn_cleanup_task(shared_cache(&clock), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
