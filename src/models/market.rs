use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable quote snapshot for a single symbol.
///
/// Refreshed on each fetch and cached with a TTL; optional fields are
/// simply missing from thinner upstream payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ps_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            previous_close: None,
            open: None,
            day_high: None,
            day_low: None,
            volume: None,
            avg_volume: None,
            market_cap: None,
            pe_ratio: None,
            pb_ratio: None,
            ps_ratio: None,
            dividend_yield: None,
            beta: None,
            week52_high: None,
            week52_low: None,
            sector: None,
            industry: None,
            country: None,
        }
    }

    /// Daily change relative to the previous close, in percent.
    pub fn change_percent(&self) -> Option<f64> {
        let prev = self.previous_close?;
        if prev == 0.0 {
            return None;
        }
        Some((self.price - prev) / prev * 100.0)
    }

    /// Today's volume relative to the average volume.
    pub fn volume_ratio(&self) -> Option<f64> {
        let avg = self.avg_volume?;
        if avg == 0.0 {
            return None;
        }
        Some(self.volume? / avg)
    }

    /// Position of the current price inside the 52-week range, 0.0 at the
    /// low and 1.0 at the high.
    pub fn week52_position(&self) -> Option<f64> {
        let high = self.week52_high?;
        let low = self.week52_low?;
        if high <= low {
            return None;
        }
        Some((self.price - low) / (high - low))
    }
}

/// One OHLCV bar. Sequences are ordered ascending by timestamp and are
/// the input to every indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// (high + low + close) / 3, used by CCI.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Company profile used for universe selection and compliance screening.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

/// Raw balance-sheet and income-statement figures feeding the financial
/// ratio screen. Any figure may be missing from the upstream payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFinancials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_debt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term_investments: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivables: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_income: Option<f64>,
}

/// History range requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl HistoryRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
        }
    }
}
