use std::sync::Arc;

use chrono::{Duration, Utc};
use dotenvy::dotenv;

use tickscan::models::market::{Candle, Quote};
use tickscan::models::scan::{ScanFilters, ScanResult, ScanType};
use tickscan::services::StaticMarketDataProvider;
use tickscan::{logging, Scanner, ScannerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let provider = Arc::new(demo_provider());
    let scanner = Scanner::new(provider, ScannerConfig::from_env());

    for scan_type in [ScanType::Undervalued, ScanType::Momentum] {
        let output = scanner.run_scan(scan_type, &ScanFilters::default()).await?;
        println!("== {} scan ==", scan_type.as_str());
        for result in &output.results {
            print_result(result);
        }
        println!(
            "  ({} requested, {} fetched, {} filtered out)",
            output.diagnostics.requested,
            output.diagnostics.fetched,
            output.diagnostics.filtered_out
        );
        println!();
    }

    Ok(())
}

fn print_result(result: &ScanResult) {
    println!(
        "  {:<6} score {:>4}  {:?}",
        result.quote.symbol, result.score, result.recommendation
    );
    for reason in &result.reasons {
        println!("      - {}", reason);
    }
}

fn demo_provider() -> StaticMarketDataProvider {
    let mut provider = StaticMarketDataProvider::new();

    let symbols: [(&str, f64, f64, f64, f64); 6] = [
        // (symbol, price, pe, pb, 52w position)
        ("AAPL", 232.0, 28.0, 44.0, 0.85),
        ("MSFT", 415.0, 33.0, 12.0, 0.75),
        ("XOM", 110.0, 9.5, 1.8, 0.45),
        ("VZ", 41.0, 8.8, 1.4, 0.25),
        ("F", 10.5, 6.2, 0.9, 0.15),
        ("NVDA", 870.0, 65.0, 50.0, 0.97),
    ];

    for (symbol, price, pe, pb, position) in symbols {
        let low = price / (1.0 + position);
        let high = low * 2.0;
        let mut quote = Quote::new(symbol, price);
        quote.previous_close = Some(price * 0.985);
        quote.volume = Some(40_000_000.0);
        quote.avg_volume = Some(25_000_000.0);
        quote.market_cap = Some(price * 1e9);
        quote.pe_ratio = Some(pe);
        quote.pb_ratio = Some(pb);
        quote.dividend_yield = Some(if pe < 12.0 { 4.5 } else { 0.6 });
        quote.week52_high = Some(high);
        quote.week52_low = Some(low);
        quote.sector = Some("Technology".to_string());
        quote.industry = Some("Software".to_string());
        quote.country = Some("US".to_string());
        provider = provider
            .with_quote(quote)
            .with_history(symbol, demo_history(price, 120));
    }

    provider
}

/// Gently trending candles ending at `price`.
fn demo_history(price: f64, bars: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::days(bars as i64);
    (0..bars)
        .map(|i| {
            let drift = price * 0.9 + price * 0.1 * (i as f64 / bars as f64);
            let wave = (i as f64 / 5.0).sin() * price * 0.01;
            let close = drift + wave;
            Candle::new(
                close * 0.998,
                close * 1.005,
                close * 0.994,
                close,
                20_000_000.0 + 1_000_000.0 * (i % 7) as f64,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}
