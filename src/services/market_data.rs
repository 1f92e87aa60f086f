//! Market data provider interface.
//!
//! Concrete upstream clients (Yahoo, Finnhub, ...) live outside the core;
//! the scanner only needs something that can hand back quote snapshots,
//! OHLCV history, profiles and raw financials, possibly `None` for
//! ordinary not-found or rate-limited conditions. `None`/empty always
//! means "exclude this candidate", never a fatal error.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ScanError;
use crate::models::market::{Candle, CompanyProfile, HistoryRange, Quote, RawFinancials};

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>, ScanError>;

    /// Possibly-partial batch fetch; missing symbols are simply absent.
    async fn fetch_quotes_batch(&self, symbols: &[String]) -> Result<Vec<Quote>, ScanError> {
        let mut quotes = Vec::new();
        for symbol in symbols {
            if let Some(quote) = self.fetch_quote(symbol).await? {
                quotes.push(quote);
            }
        }
        Ok(quotes)
    }

    async fn fetch_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, ScanError>;

    /// Bars in ascending time order; may be empty.
    async fn fetch_history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, ScanError>;

    async fn fetch_financials(&self, symbol: &str) -> Result<Option<RawFinancials>, ScanError>;
}

/// In-memory provider backed by canned data, used by the demo binary and
/// the integration tests.
#[derive(Debug, Default)]
pub struct StaticMarketDataProvider {
    quotes: HashMap<String, Quote>,
    profiles: HashMap<String, CompanyProfile>,
    history: HashMap<String, Vec<Candle>>,
    financials: HashMap<String, RawFinancials>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.insert(quote.symbol.clone(), quote);
        self
    }

    pub fn with_profile(mut self, symbol: &str, profile: CompanyProfile) -> Self {
        self.profiles.insert(symbol.to_string(), profile);
        self
    }

    pub fn with_history(mut self, symbol: &str, candles: Vec<Candle>) -> Self {
        self.history.insert(symbol.to_string(), candles);
        self
    }

    pub fn with_financials(mut self, symbol: &str, financials: RawFinancials) -> Self {
        self.financials.insert(symbol.to_string(), financials);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>, ScanError> {
        Ok(self.quotes.get(symbol).cloned())
    }

    async fn fetch_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, ScanError> {
        Ok(self.profiles.get(symbol).cloned())
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        _range: HistoryRange,
    ) -> Result<Vec<Candle>, ScanError> {
        Ok(self.history.get(symbol).cloned().unwrap_or_default())
    }

    async fn fetch_financials(&self, symbol: &str) -> Result<Option<RawFinancials>, ScanError> {
        Ok(self.financials.get(symbol).cloned())
    }
}
