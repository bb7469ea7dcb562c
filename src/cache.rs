//! Explicit time-bounded cache of the loaded snapshot.
//!
//! Readers that query the snapshot repeatedly (a dashboard refreshing its
//! views, say) hold a [`SnapshotCache`] and pass the current instant in.
//! Nothing is cached process-wide.

use crate::config::Config;
use crate::models::NewsRecord;
use crate::store::Store;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
pub struct SnapshotCache {
    store: Store,
    ttl: Duration,
    loaded_at: Option<Instant>,
    records: Arc<[NewsRecord]>,
}

impl SnapshotCache {
    pub fn new(store: Store, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            loaded_at: None,
            records: Arc::from(Vec::<NewsRecord>::new()),
        }
    }

    /// A cache over the configured snapshot with the configured TTL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Store::new(&config.snapshot_path), config.cache_ttl())
    }

    /// The cached snapshot, reloaded from the store if it has never been
    /// loaded or is at least `ttl` old as of `now`.
    pub async fn get(&mut self, now: Instant) -> Arc<[NewsRecord]> {
        if self.is_stale(now) {
            let records = self.store.load().await;
            debug!(count = records.len(), "Refreshed snapshot cache");
            self.records = Arc::from(records);
            self.loaded_at = Some(now);
        }
        Arc::clone(&self.records)
    }

    pub fn is_stale(&self, now: Instant) -> bool {
        match self.loaded_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= self.ttl,
        }
    }

    /// Force the next [`get`](Self::get) to reload, e.g. right after a
    /// collection run saved a new snapshot.
    pub fn invalidate(&mut self) {
        self.loaded_at = None;
    }

    pub fn loaded_at(&self) -> Option<Instant> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(title: &str) -> NewsRecord {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        NewsRecord {
            title: title.to_string(),
            summary: String::new(),
            press: String::new(),
            display_date: String::new(),
            link: "https://news.example".to_string(),
            parsed_date: at,
            keyword: "k".to_string(),
            collected_at: at,
        }
    }

    #[tokio::test]
    async fn test_serves_cached_copy_until_ttl_expires() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("news_data.json"));
        store.save(&[record("first")]).await.unwrap();

        let mut cache = SnapshotCache::new(store.clone(), Duration::from_secs(3600));
        let t0 = Instant::now();
        assert_eq!(cache.get(t0).await[0].title, "first");

        store.save(&[record("second")]).await.unwrap();
        let cached = cache.get(t0 + Duration::from_secs(3599)).await;
        assert_eq!(cached[0].title, "first");

        let refreshed = cache.get(t0 + Duration::from_secs(3600)).await;
        assert_eq!(refreshed[0].title, "second");
        assert_eq!(cache.loaded_at(), Some(t0 + Duration::from_secs(3600)));
    }

    #[tokio::test]
    async fn test_from_config_uses_snapshot_path_and_ttl() {
        let dir = tempdir().unwrap();
        let config = Config {
            snapshot_path: dir.path().join("snap.json"),
            cache_ttl_secs: 60,
            ..Config::default()
        };
        let store = Store::new(&config.snapshot_path);
        store.save(&[record("configured")]).await.unwrap();

        let mut cache = SnapshotCache::from_config(&config);
        assert_eq!(cache.store.path(), config.snapshot_path.as_path());
        assert_eq!(cache.ttl, Duration::from_secs(60));

        let t0 = Instant::now();
        assert_eq!(cache.get(t0).await[0].title, "configured");
        assert!(!cache.is_stale(t0 + Duration::from_secs(59)));
        assert!(cache.is_stale(t0 + Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("news_data.json"));
        let mut cache = SnapshotCache::new(store.clone(), Duration::from_secs(3600));
        let t0 = Instant::now();

        assert!(cache.get(t0).await.is_empty());
        store.save(&[record("new")]).await.unwrap();
        assert!(cache.get(t0).await.is_empty());

        cache.invalidate();
        assert!(cache.is_stale(t0));
        assert_eq!(cache.get(t0).await.len(), 1);
    }
}
