//! In-flight request deduplication.
//!
//! Concurrent callers asking for the identical key share one upstream
//! call; the leader's result fans out to every waiter. Entries older than
//! the configured timeout are treated as abandoned and replaced, so one
//! hung upstream call cannot wedge later callers on the same key.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::time::Instant;
use tracing::debug;

type SharedResult<V> = Result<V, String>;

struct Inflight<V> {
    started_at: Instant,
    tx: broadcast::Sender<SharedResult<V>>,
}

enum Role<V> {
    Leader(broadcast::Sender<SharedResult<V>>),
    Follower(broadcast::Receiver<SharedResult<V>>),
}

pub struct InflightDedup<V> {
    inner: Arc<Mutex<HashMap<String, Inflight<V>>>>,
    /// Age past which an in-flight entry is considered abandoned.
    timeout: Duration,
}

impl<V> Clone for InflightDedup<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            timeout: self.timeout,
        }
    }
}

impl<V: Clone + Send + 'static> InflightDedup<V> {
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    /// Run `make` for `key`, unless an identical call is already in
    /// flight, in which case wait for its result instead.
    ///
    /// Errors cross the fan-out as strings; callers map them back into
    /// their own error type.
    pub async fn run<F, Fut>(&self, key: &str, make: F) -> SharedResult<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SharedResult<V>>,
    {
        // Check and take the lead under one lock, so exactly one caller
        // per key ever leads; an abandoned entry is overwritten here and
        // its followers see the sender drop.
        let role = {
            let mut inflight = self.inner.lock().await;
            match inflight.get(key) {
                Some(entry) if entry.started_at.elapsed() < self.timeout => {
                    debug!(key = key, "joining in-flight request");
                    Role::Follower(entry.tx.subscribe())
                }
                _ => {
                    let (tx, _) = broadcast::channel(1);
                    inflight.insert(
                        key.to_string(),
                        Inflight {
                            started_at: Instant::now(),
                            tx: tx.clone(),
                        },
                    );
                    Role::Leader(tx)
                }
            }
        };

        let tx = match role {
            Role::Follower(mut rx) => {
                return match rx.recv().await {
                    Ok(result) => result,
                    // Leader dropped without sending (cancelled or timed out).
                    Err(_) => Err(format!("in-flight request for {} was abandoned", key)),
                };
            }
            Role::Leader(tx) => tx,
        };

        let result = make().await;

        {
            let mut inflight = self.inner.lock().await;
            inflight.remove(key);
        }
        // No waiters is fine.
        let _ = tx.send(result.clone());

        result
    }

    /// Number of keys currently in flight, for diagnostics.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
