//! Parabolic SAR (Stop and Reverse) indicator

use crate::models::indicators::SarIndicator;
use crate::models::market::Candle;

const AF_STEP: f64 = 0.02;
const AF_MAX: f64 = 0.2;

/// Calculate the Parabolic SAR over the full candle sequence.
///
/// Iterative trend-following stop: the SAR accelerates toward price by
/// `AF_STEP` per new extreme (capped at `AF_MAX`) and flips direction
/// when price crosses it.
pub fn calculate_sar(candles: &[Candle]) -> Option<SarIndicator> {
    calculate_sar_with(candles, AF_STEP, AF_MAX)
}

pub fn calculate_sar_with(
    candles: &[Candle],
    af_step: f64,
    af_max: f64,
) -> Option<SarIndicator> {
    if candles.len() < 2 {
        return None;
    }

    let mut rising = candles[1].close >= candles[0].close;
    let mut sar = if rising {
        candles[0].low
    } else {
        candles[0].high
    };
    let mut extreme = if rising {
        candles[0].high
    } else {
        candles[0].low
    };
    let mut af = af_step;

    for i in 1..candles.len() {
        let candle = &candles[i];
        sar += af * (extreme - sar);

        if rising {
            // SAR may not sit above the prior two lows.
            let clamp = candles[i.saturating_sub(2)..i]
                .iter()
                .map(|c| c.low)
                .fold(f64::INFINITY, f64::min);
            sar = sar.min(clamp);

            if candle.low < sar {
                rising = false;
                sar = extreme;
                extreme = candle.low;
                af = af_step;
            } else if candle.high > extreme {
                extreme = candle.high;
                af = (af + af_step).min(af_max);
            }
        } else {
            let clamp = candles[i.saturating_sub(2)..i]
                .iter()
                .map(|c| c.high)
                .fold(f64::NEG_INFINITY, f64::max);
            sar = sar.max(clamp);

            if candle.high > sar {
                rising = true;
                sar = extreme;
                extreme = candle.high;
                af = af_step;
            } else if candle.low < extreme {
                extreme = candle.low;
                af = (af + af_step).min(af_max);
            }
        }
    }

    Some(SarIndicator { value: sar, rising })
}
