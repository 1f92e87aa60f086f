//! Assembles every indicator for one symbol into an [`IndicatorBundle`]
//! and derives the composite overall signal.

use crate::indicators::math;
use crate::indicators::momentum::{
    calculate_cci_default, calculate_macd_default, calculate_rsi_default,
    calculate_stochastic_default, calculate_williams_r_default,
};
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{calculate_sar, calculate_smas, calculate_emas};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::indicators::volume::calculate_obv;
use crate::models::indicators::{IndicatorBundle, OverallSignal};
use crate::models::market::Candle;

const SMA_PERIODS: [u32; 3] = [20, 50, 200];
const EMA_PERIODS: [u32; 2] = [12, 26];
const VOLUME_MA_PERIOD: usize = 20;

/// Compute every indicator the history allows. Indicators with too few
/// bars stay `None`; nothing here fails.
pub fn compute_indicators(symbol: &str, candles: &[Candle]) -> IndicatorBundle {
    let price = candles.last().map(|c| c.close).unwrap_or_default();
    let mut bundle = IndicatorBundle::new(symbol, price);

    bundle.smas = calculate_smas(candles, &SMA_PERIODS);
    bundle.emas = calculate_emas(candles, &EMA_PERIODS);
    bundle.rsi = calculate_rsi_default(candles);
    bundle.macd = calculate_macd_default(candles);
    bundle.bollinger = calculate_bollinger_bands_default(candles);
    bundle.stochastic = calculate_stochastic_default(candles);
    bundle.williams_r = calculate_williams_r_default(candles);
    bundle.cci = calculate_cci_default(candles);
    bundle.obv = calculate_obv(candles);
    bundle.sar = calculate_sar(candles);
    bundle.support_resistance = calculate_support_resistance(candles);
    bundle.volume_ratio = volume_ratio(candles);
    bundle.overall = overall_signal(&bundle);

    bundle
}

/// Last bar's volume relative to its trailing 20-bar average.
fn volume_ratio(candles: &[Candle]) -> Option<f64> {
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let avg = math::sma(&volumes, VOLUME_MA_PERIOD)?;
    if avg == 0.0 {
        return None;
    }
    Some(volumes.last()? / avg)
}

/// Composite signal: price vs SMA20/50/200, RSI extremes and the MACD
/// cross each cast one vote; the vote total maps onto fixed bands with
/// the lower bound of each band inclusive. `None` when no component cast
/// a vote, so short histories never produce a verdict.
pub fn overall_signal(bundle: &IndicatorBundle) -> Option<OverallSignal> {
    let mut score: i32 = 0;
    let mut votes: u32 = 0;

    for period in SMA_PERIODS {
        if let Some(sma) = bundle.sma(period) {
            score += if bundle.price > sma { 1 } else { -1 };
            votes += 1;
        }
    }

    if let Some(rsi) = &bundle.rsi {
        if rsi.value < 30.0 {
            score += 1;
            votes += 1;
        } else if rsi.value > 70.0 {
            score -= 1;
            votes += 1;
        }
    }

    if let Some(macd) = &bundle.macd {
        score += if macd.macd > macd.signal { 1 } else { -1 };
        votes += 1;
    }

    if votes == 0 {
        return None;
    }

    Some(if score >= 4 {
        OverallSignal::StrongBuy
    } else if score >= 2 {
        OverallSignal::Buy
    } else if score > 0 {
        OverallSignal::Hold
    } else if score <= -2 {
        OverallSignal::StrongSell
    } else {
        OverallSignal::Sell
    })
}
