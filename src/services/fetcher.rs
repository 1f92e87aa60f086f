//! Cached, rate-limited, deduplicated fetch paths.
//!
//! [`RateLimitedFetcher`] is the raw HTTP path: TTL cache in front,
//! fixed-window limiter and in-flight dedup behind, bounded 429 retries,
//! and a stale-cache fallback when the upstream fails outright.
//!
//! [`MarketDataService`] applies the same policies one level up, over a
//! [`MarketDataProvider`], and adds batch fan-out with bounded
//! concurrency for the scanner's quote sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::cache::{ttl_for, FixedWindowLimiter, InflightDedup, TtlCache};
use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::models::market::{Candle, CompanyProfile, HistoryRange, Quote, RawFinancials};
use crate::services::market_data::MarketDataProvider;

const RETRY_AFTER_FALLBACK: Duration = Duration::from_secs(5);

/// Generic rate-limited JSON fetcher over reqwest.
pub struct RateLimitedFetcher {
    client: reqwest::Client,
    cache: TtlCache<serde_json::Value>,
    limiter: Arc<FixedWindowLimiter>,
    dedup: InflightDedup<serde_json::Value>,
    request_timeout: Duration,
    max_retry_attempts: u32,
}

impl RateLimitedFetcher {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: TtlCache::new(ttl_for::QUOTES),
            limiter: Arc::new(FixedWindowLimiter::new(
                config.rate_limit_requests,
                config.rate_limit_window,
            )),
            dedup: InflightDedup::new(config.request_timeout),
            request_timeout: config.request_timeout,
            max_retry_attempts: config.max_retry_attempts,
        }
    }

    /// GET `url` from `source_name` as JSON, honoring cache, dedup,
    /// rate window and 429 backoff. On a hard upstream failure an
    /// expired cache entry is served instead, if one exists.
    pub async fn fetch_json(
        &self,
        source_name: &str,
        url: &str,
    ) -> Result<serde_json::Value, ScanError> {
        let key = format!("GET:{}", url);

        if let Some(value) = self.cache.get(&key).await {
            debug!(source = source_name, url = url, "cache hit");
            return Ok(value);
        }

        let fetched = self
            .dedup
            .run(&key, || self.fetch_uncached(source_name, url))
            .await;

        match fetched {
            Ok(value) => {
                self.cache.set(key, value.clone()).await;
                Ok(value)
            }
            Err(err) => {
                if let Some((stale, _)) = self.cache.get_stale(&key).await {
                    warn!(
                        source = source_name,
                        url = url,
                        error = %err,
                        "upstream failed, serving stale cache entry"
                    );
                    return Ok(stale);
                }
                Err(ScanError::UpstreamUnavailable(err))
            }
        }
    }

    async fn fetch_uncached(
        &self,
        source_name: &str,
        url: &str,
    ) -> Result<serde_json::Value, String> {
        let mut attempt = 0u32;
        loop {
            self.limiter.acquire(source_name).await;

            let response = timeout(self.request_timeout, self.client.get(url).send())
                .await
                .map_err(|_| format!("request to {} timed out", url))?
                .map_err(|e| e.to_string())?;

            if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                attempt += 1;
                if attempt >= self.max_retry_attempts {
                    return Err(format!(
                        "rate limited by {} after {} attempts",
                        source_name, attempt
                    ));
                }
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(RETRY_AFTER_FALLBACK);
                self.limiter.note_retry_after(source_name, retry_after).await;
                continue;
            }

            if !response.status().is_success() {
                return Err(format!("{} returned {}", source_name, response.status()));
            }

            return timeout(self.request_timeout, response.json::<serde_json::Value>())
                .await
                .map_err(|_| format!("reading body from {} timed out", url))?
                .map_err(|e| e.to_string());
        }
    }
}

/// Outcome of a batched fetch. Soft failures (timeouts, forbidden) are
/// kept apart from hard errors; neither aborts the batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub quotes: Vec<Quote>,
    pub cache_hits: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Caching front over a [`MarketDataProvider`], shared process-wide so a
/// second scan benefits from the first scan's warm cache.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
    quotes: TtlCache<Quote>,
    profiles: TtlCache<Option<CompanyProfile>>,
    history: TtlCache<Vec<Candle>>,
    financials: TtlCache<Option<RawFinancials>>,
    limiter: FixedWindowLimiter,
    batch_size: usize,
    max_concurrent_batches: usize,
    batch_group_delay: Duration,
    request_timeout: Duration,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: &ScannerConfig) -> Self {
        Self {
            provider,
            quotes: TtlCache::new(ttl_for::QUOTES),
            profiles: TtlCache::new(ttl_for::PROFILES),
            history: TtlCache::new(ttl_for::HISTORY),
            financials: TtlCache::new(ttl_for::FINANCIALS),
            limiter: FixedWindowLimiter::new(
                config.rate_limit_requests,
                config.rate_limit_window,
            ),
            batch_size: config.batch_size.max(1),
            max_concurrent_batches: config.max_concurrent_batches.max(1),
            batch_group_delay: config.batch_group_delay,
            request_timeout: config.request_timeout,
        }
    }

    /// Fetch quotes for `symbols`, serving warm entries from cache and
    /// batching the rest with bounded concurrency. Output preserves the
    /// input symbol order, which downstream ranking uses as tie-break.
    pub async fn quotes_batch(&self, symbols: &[String]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        let mut found: HashMap<String, Quote> = HashMap::new();
        let mut misses: Vec<String> = Vec::new();

        for symbol in symbols {
            match self.quotes.get(symbol).await {
                Some(quote) => {
                    found.insert(symbol.clone(), quote);
                    outcome.cache_hits += 1;
                }
                None => misses.push(symbol.clone()),
            }
        }

        if !misses.is_empty() {
            debug!(
                total = symbols.len(),
                cache_hits = outcome.cache_hits,
                to_fetch = misses.len(),
                "quote batch sweep"
            );
            let semaphore = Arc::new(Semaphore::new(self.max_concurrent_batches));
            let chunks: Vec<Vec<String>> = misses
                .chunks(self.batch_size)
                .map(|c| c.to_vec())
                .collect();

            for group in chunks.chunks(self.max_concurrent_batches) {
                let futures = group.iter().map(|chunk| {
                    let semaphore = semaphore.clone();
                    async move {
                        // Closed only on runtime shutdown.
                        let _permit = semaphore.acquire().await.ok()?;
                        self.limiter.acquire("quotes").await;
                        let result = timeout(
                            self.request_timeout,
                            self.provider.fetch_quotes_batch(chunk),
                        )
                        .await;
                        Some((chunk.len(), result))
                    }
                });

                for item in join_all(futures).await.into_iter().flatten() {
                    match item {
                        (len, Err(_timeout)) => {
                            outcome.skipped += len;
                            warn!(batch_len = len, "quote batch timed out, skipping");
                        }
                        (len, Ok(Err(err))) => {
                            outcome.failed += len;
                            warn!(batch_len = len, error = %err, "quote batch failed");
                        }
                        (_, Ok(Ok(quotes))) => {
                            for quote in quotes {
                                self.quotes.set(quote.symbol.clone(), quote.clone()).await;
                                found.insert(quote.symbol.clone(), quote);
                            }
                        }
                    }
                }

                if !self.batch_group_delay.is_zero() {
                    sleep(self.batch_group_delay).await;
                }
            }
        }

        for symbol in symbols {
            if let Some(quote) = found.remove(symbol) {
                outcome.quotes.push(quote);
            }
        }
        info!(
            requested = symbols.len(),
            fetched = outcome.quotes.len(),
            skipped = outcome.skipped,
            failed = outcome.failed,
            "quote batch complete"
        );
        outcome
    }

    pub async fn profile(&self, symbol: &str) -> Option<CompanyProfile> {
        if let Some(cached) = self.profiles.get(symbol).await {
            return cached;
        }
        self.limiter.acquire("profiles").await;
        match timeout(self.request_timeout, self.provider.fetch_profile(symbol)).await {
            Ok(Ok(profile)) => {
                self.profiles.set(symbol.to_string(), profile.clone()).await;
                profile
            }
            Ok(Err(err)) => {
                warn!(symbol = symbol, error = %err, "profile fetch failed");
                self.stale_profile(symbol).await
            }
            Err(_) => {
                warn!(symbol = symbol, "profile fetch timed out");
                self.stale_profile(symbol).await
            }
        }
    }

    async fn stale_profile(&self, symbol: &str) -> Option<CompanyProfile> {
        let (stale, is_stale) = self.profiles.get_stale(symbol).await?;
        if is_stale {
            warn!(symbol = symbol, "serving stale profile");
        }
        stale
    }

    /// Bars in ascending time order; empty on failure or timeout.
    pub async fn history(&self, symbol: &str, range: HistoryRange) -> Vec<Candle> {
        let key = format!("{}:{}", symbol, range.as_str());
        if let Some(candles) = self.history.get(&key).await {
            return candles;
        }
        self.limiter.acquire("history").await;
        match timeout(
            self.request_timeout,
            self.provider.fetch_history(symbol, range),
        )
        .await
        {
            Ok(Ok(candles)) => {
                self.history.set(key, candles.clone()).await;
                candles
            }
            Ok(Err(err)) => {
                warn!(symbol = symbol, error = %err, "history fetch failed");
                self.history
                    .get_stale(&key)
                    .await
                    .map(|(candles, _)| candles)
                    .unwrap_or_default()
            }
            Err(_) => {
                warn!(symbol = symbol, "history fetch timed out");
                Vec::new()
            }
        }
    }

    pub async fn financials(&self, symbol: &str) -> Option<RawFinancials> {
        if let Some(cached) = self.financials.get(symbol).await {
            return cached;
        }
        self.limiter.acquire("financials").await;
        match timeout(
            self.request_timeout,
            self.provider.fetch_financials(symbol),
        )
        .await
        {
            Ok(Ok(financials)) => {
                self.financials
                    .set(symbol.to_string(), financials.clone())
                    .await;
                financials
            }
            Ok(Err(err)) => {
                warn!(symbol = symbol, error = %err, "financials fetch failed");
                None
            }
            Err(_) => None,
        }
    }

    /// Drop expired entries across every data-class cache.
    pub async fn purge_expired(&self) {
        self.quotes.purge_expired().await;
        self.profiles.purge_expired().await;
        self.history.purge_expired().await;
        self.financials.purge_expired().await;
    }
}
