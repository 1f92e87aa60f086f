//! Scanner tuning knobs.
//!
//! The production scanner shipped with at least two sets of constants
//! (a capped, conservative variant and an expanded, more lenient one);
//! everything variant-specific lives here rather than in the engine.

use std::env;
use std::time::Duration;

/// Current runtime environment, from `ENVIRONMENT` (default "sandbox").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Symbols sampled from the candidate pool per run.
    pub universe_sample_size: usize,
    /// Symbols per fetch batch.
    pub batch_size: usize,
    /// Batches allowed in flight at once.
    pub max_concurrent_batches: usize,
    /// Pause between batch groups, to stay friendly to the rate window.
    pub batch_group_delay: Duration,
    /// Per-upstream-call timeout; a timed-out symbol is skipped, not retried.
    pub request_timeout: Duration,
    /// Only this many top-scored candidates get history + indicators.
    pub technical_top_n: usize,
    /// Final result list cap.
    pub result_limit: usize,
    /// Candidates scoring at or below this are dropped after the
    /// fundamental pass.
    pub min_fundamental_score: i32,
    /// Fixed rate-limit window: this many requests per window.
    pub rate_limit_requests: u32,
    pub rate_limit_window: Duration,
    /// Bounded retry budget for 429 responses.
    pub max_retry_attempts: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            universe_sample_size: 200,
            batch_size: 25,
            max_concurrent_batches: 3,
            batch_group_delay: Duration::from_millis(250),
            request_timeout: Duration::from_secs(8),
            technical_top_n: 100,
            result_limit: 50,
            min_fundamental_score: 0,
            rate_limit_requests: 60,
            rate_limit_window: Duration::from_secs(60),
            max_retry_attempts: 3,
        }
    }
}

impl ScannerConfig {
    /// Defaults with individual knobs overridden from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(n) = env_usize("SCAN_UNIVERSE_SAMPLE_SIZE") {
            config.universe_sample_size = n;
        }
        if let Some(n) = env_usize("SCAN_BATCH_SIZE") {
            config.batch_size = n.max(1);
        }
        if let Some(n) = env_usize("SCAN_MAX_CONCURRENT_BATCHES") {
            config.max_concurrent_batches = n.max(1);
        }
        if let Some(ms) = env_u64("SCAN_BATCH_GROUP_DELAY_MS") {
            config.batch_group_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = env_u64("SCAN_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(ms);
        }
        if let Some(n) = env_usize("SCAN_TECHNICAL_TOP_N") {
            config.technical_top_n = n;
        }
        if let Some(n) = env_usize("SCAN_RESULT_LIMIT") {
            config.result_limit = n;
        }
        if let Some(n) = env_u64("SCAN_RATE_LIMIT_REQUESTS") {
            config.rate_limit_requests = n as u32;
        }
        if let Some(secs) = env_u64("SCAN_RATE_LIMIT_WINDOW_SECONDS") {
            config.rate_limit_window = Duration::from_secs(secs.max(1));
        }
        config
    }
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
