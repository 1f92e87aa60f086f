//! Fixed-window rate limiter, one window per upstream source.
//!
//! When a window's quota is spent, callers sleep until the window resets
//! instead of failing. A 429's Retry-After pushes the whole source's
//! window ahead so concurrent tasks back off together.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

#[derive(Debug)]
struct WindowState {
    window_start: Instant,
    count: u32,
    /// Set from a Retry-After header; nothing proceeds before this.
    blocked_until: Option<Instant>,
}

#[derive(Debug)]
pub struct FixedWindowLimiter {
    windows: Mutex<HashMap<String, WindowState>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests: max_requests.max(1),
            window,
        }
    }

    /// Wait for a slot in `source_name`'s window, then consume it.
    ///
    /// Reentrant-safe: state is only touched under the mutex, and the
    /// mutex is released across every sleep.
    pub async fn acquire(&self, source_name: &str) {
        loop {
            let wait = {
                let mut windows = self.windows.lock().await;
                let now = Instant::now();
                let state = windows.entry(source_name.to_string()).or_insert(WindowState {
                    window_start: now,
                    count: 0,
                    blocked_until: None,
                });

                if let Some(until) = state.blocked_until {
                    if until > now {
                        Some(until - now)
                    } else {
                        state.blocked_until = None;
                        None
                    }
                } else {
                    None
                }
                .or_else(|| {
                    if now.duration_since(state.window_start) >= self.window {
                        state.window_start = now;
                        state.count = 0;
                    }
                    if state.count < self.max_requests {
                        state.count += 1;
                        None
                    } else {
                        Some(self.window - now.duration_since(state.window_start))
                    }
                })
            };

            match wait {
                None => return,
                Some(delay) => {
                    debug!(
                        source = source_name,
                        delay_ms = delay.as_millis() as u64,
                        "rate window exhausted, waiting for reset"
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    /// Record a Retry-After signal for `source_name`.
    pub async fn note_retry_after(&self, source_name: &str, retry_after: Duration) {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        let state = windows.entry(source_name.to_string()).or_insert(WindowState {
            window_start: now,
            count: 0,
            blocked_until: None,
        });
        let until = now + retry_after;
        if state.blocked_until.map_or(true, |b| until > b) {
            state.blocked_until = Some(until);
        }
        warn!(
            source = source_name,
            retry_after_ms = retry_after.as_millis() as u64,
            "upstream returned 429, blocking source window"
        );
    }

    /// Requests still available in the current window, for diagnostics.
    pub async fn remaining(&self, source_name: &str) -> u32 {
        let windows = self.windows.lock().await;
        match windows.get(source_name) {
            Some(state) if Instant::now().duration_since(state.window_start) < self.window => {
                self.max_requests.saturating_sub(state.count)
            }
            _ => self.max_requests,
        }
    }
}
