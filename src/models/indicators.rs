use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// (upper - lower) / middle
    pub width: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
    pub k_period: u32,
    pub d_period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WilliamsRIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CciIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObvIndicator {
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarIndicator {
    pub value: f64,
    /// true while SAR sits below price (uptrend)
    pub rising: bool,
}

/// Nearest price levels around the last close: up to 5 each side,
/// resistance ascending away from the price, support descending from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResistanceIndicator {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallSignal {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// Everything the indicator pass could compute for one symbol. Any
/// indicator with insufficient history simply stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub smas: Vec<SmaIndicator>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emas: Vec<EmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic: Option<StochasticIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub williams_r: Option<WilliamsRIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cci: Option<CciIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv: Option<ObvIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sar: Option<SarIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_resistance: Option<SupportResistanceIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallSignal>,
}

impl IndicatorBundle {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            smas: Vec::new(),
            emas: Vec::new(),
            rsi: None,
            macd: None,
            bollinger: None,
            stochastic: None,
            williams_r: None,
            cci: None,
            obv: None,
            sar: None,
            support_resistance: None,
            volume_ratio: None,
            overall: None,
        }
    }

    /// SMA of the given period, if it was computed.
    pub fn sma(&self, period: u32) -> Option<f64> {
        self.smas
            .iter()
            .find(|s| s.period == period)
            .map(|s| s.value)
    }
}
