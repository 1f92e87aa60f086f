pub mod fetcher;
pub mod market_data;

pub use fetcher::{BatchOutcome, MarketDataService, RateLimitedFetcher};
pub use market_data::{MarketDataProvider, StaticMarketDataProvider};
