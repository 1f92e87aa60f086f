//! Technical-score bonus applied to the top-ranked candidates after the
//! indicator pass.
//!
//! The direction of each contribution depends on the scan family: an
//! oversold RSI is an entry point for value-oriented scans and a red
//! flag for momentum-oriented ones.

use crate::models::indicators::{IndicatorBundle, OverallSignal};
use crate::models::scan::{ScanSignal, ScanType};

fn is_value_oriented(scan_type: ScanType) -> bool {
    matches!(
        scan_type,
        ScanType::Undervalued | ScanType::Value | ScanType::Quality | ScanType::Turnaround
    )
}

/// Weighted technical contributions for one indicator bundle.
pub fn technical_bonus(
    scan_type: ScanType,
    bundle: &IndicatorBundle,
) -> (i32, Vec<ScanSignal>) {
    let mut total = 0;
    let mut signals = Vec::new();
    let value_oriented = is_value_oriented(scan_type);

    let mut push = |signal: ScanSignal, score: &mut i32| {
        *score += signal.weight;
        signals.push(signal);
    };

    if let Some(rsi) = &bundle.rsi {
        if rsi.value < 30.0 {
            if value_oriented {
                push(
                    ScanSignal::positive(
                        "technical",
                        format!("RSI oversold at {:.0}, potential entry", rsi.value),
                        10,
                    ),
                    &mut total,
                );
            } else {
                push(
                    ScanSignal::negative(
                        "technical",
                        format!("RSI oversold at {:.0}, momentum broken", rsi.value),
                        5,
                    ),
                    &mut total,
                );
            }
        } else if rsi.value > 70.0 {
            push(
                ScanSignal::negative(
                    "technical",
                    format!("RSI overbought at {:.0}", rsi.value),
                    if value_oriented { 10 } else { 5 },
                ),
                &mut total,
            );
        } else if !value_oriented && rsi.value >= 50.0 {
            push(
                ScanSignal::positive(
                    "technical",
                    format!("RSI {:.0} shows healthy momentum", rsi.value),
                    10,
                ),
                &mut total,
            );
        }
    }

    if let Some(macd) = &bundle.macd {
        if macd.macd > macd.signal {
            push(
                ScanSignal::positive("technical", "MACD above its signal line".to_string(), 10),
                &mut total,
            );
            if !value_oriented && macd.histogram > 0.0 {
                push(
                    ScanSignal::positive(
                        "technical",
                        "MACD histogram expanding".to_string(),
                        5,
                    ),
                    &mut total,
                );
            }
        } else {
            push(
                ScanSignal::negative("technical", "MACD below its signal line".to_string(), 10),
                &mut total,
            );
        }
    }

    let sma20 = bundle.sma(20);
    let sma50 = bundle.sma(50);
    let sma200 = bundle.sma(200);
    if let (Some(s20), Some(s50)) = (sma20, sma50) {
        if bundle.price > s50 && s20 > s50 {
            push(
                ScanSignal::positive(
                    "technical",
                    "Price above SMA50 with SMA20 leading".to_string(),
                    10,
                ),
                &mut total,
            );
        }
    }
    if let Some(s200) = sma200 {
        if bundle.price < s200 {
            if value_oriented {
                push(
                    ScanSignal::positive(
                        "technical",
                        "Below its 200-day average, discounted".to_string(),
                        5,
                    ),
                    &mut total,
                );
            } else {
                push(
                    ScanSignal::negative(
                        "technical",
                        "Below its 200-day average".to_string(),
                        10,
                    ),
                    &mut total,
                );
            }
        }
    }

    if let Some(ratio) = bundle.volume_ratio {
        if ratio > 2.0 {
            push(
                ScanSignal::positive(
                    "technical",
                    format!("Volume {:.1}x its 20-day average", ratio),
                    if value_oriented { 5 } else { 10 },
                ),
                &mut total,
            );
        }
    }

    if let Some(bands) = &bundle.bollinger {
        if bundle.price < bands.lower {
            if value_oriented {
                push(
                    ScanSignal::positive(
                        "technical",
                        "Price below the lower Bollinger band".to_string(),
                        10,
                    ),
                    &mut total,
                );
            } else {
                push(
                    ScanSignal::negative(
                        "technical",
                        "Price broke the lower Bollinger band".to_string(),
                        5,
                    ),
                    &mut total,
                );
            }
        } else if bundle.price > bands.upper {
            if scan_type == ScanType::Breakout {
                push(
                    ScanSignal::positive(
                        "technical",
                        "Price cleared the upper Bollinger band".to_string(),
                        10,
                    ),
                    &mut total,
                );
            } else if value_oriented {
                push(
                    ScanSignal::negative(
                        "technical",
                        "Price stretched above the upper Bollinger band".to_string(),
                        10,
                    ),
                    &mut total,
                );
            }
        }
    }

    if let Some(overall) = bundle.overall {
        let (message, weight) = match overall {
            OverallSignal::StrongBuy => ("Overall trend reads strong buy", 15),
            OverallSignal::Buy => ("Overall trend reads buy", 10),
            OverallSignal::Hold => ("Overall trend is neutral", 0),
            OverallSignal::Sell => ("Overall trend reads sell", -10),
            OverallSignal::StrongSell => ("Overall trend reads strong sell", -15),
        };
        if weight > 0 {
            push(
                ScanSignal::positive("technical", message.to_string(), weight),
                &mut total,
            );
        } else if weight < 0 {
            push(
                ScanSignal::negative("technical", message.to_string(), weight),
                &mut total,
            );
        } else {
            push(
                ScanSignal::neutral("technical", message.to_string()),
                &mut total,
            );
        }
    }

    (total, signals)
}
