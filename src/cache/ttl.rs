//! TTL cache with an explicit stale-read fallback.
//!
//! An expired entry is invisible to [`TtlCache::get`] but stays in the map
//! until purged, so a caller whose upstream fetch just failed can still
//! serve it through [`TtlCache::get_stale`]. Better stale than absent for
//! display-only data.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.inserted_at) > self.ttl
    }
}

#[derive(Debug)]
struct Inner<V> {
    map: HashMap<String, Entry<V>>,
    default_ttl: Duration,
}

/// Thread-safe in-memory TTL cache, created once per process and shared
/// by reference across concurrent scans.
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    inner: Arc<RwLock<Inner<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                map: HashMap::new(),
                default_ttl,
            })),
        }
    }

    /// Fresh value for `key`; an expired entry reads as absent.
    pub async fn get(&self, key: &str) -> Option<V> {
        let inner = self.inner.read().await;
        let entry = inner.map.get(key)?;
        if entry.is_expired(Instant::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Value for `key` even when expired. Returns the value together with
    /// a staleness flag so the caller can log degraded reads.
    pub async fn get_stale(&self, key: &str) -> Option<(V, bool)> {
        let inner = self.inner.read().await;
        let entry = inner.map.get(key)?;
        Some((entry.value.clone(), entry.is_expired(Instant::now())))
    }

    pub async fn set(&self, key: impl Into<String>, value: V) {
        let mut inner = self.inner.write().await;
        let ttl = inner.default_ttl;
        inner.map.insert(
            key.into(),
            Entry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut inner = self.inner.write().await;
        inner.map.insert(
            key.into(),
            Entry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Drop expired entries. Entries kept for stale fallback go away here,
    /// so callers decide when degraded reads stop being useful.
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        let mut inner = self.inner.write().await;
        inner.map.retain(|_, entry| !entry.is_expired(now));
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.map.len()
    }
}

/// Per-data-class TTLs used by the market caches.
pub mod ttl_for {
    use std::time::Duration;

    pub const QUOTES: Duration = Duration::from_secs(5 * 60);
    pub const PROFILES: Duration = Duration::from_secs(60 * 60);
    pub const FINANCIALS: Duration = Duration::from_secs(60 * 60);
    pub const HISTORY: Duration = Duration::from_secs(30 * 60);
}
