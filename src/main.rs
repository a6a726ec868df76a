//! Swing structure demo over the illustrative EURUSD series.

use dotenvy::dotenv;
use swingscope::config::AnalysisConfig;
use swingscope::demo::{demo_candles, DEMO_DEPTH, DEMO_SYMBOL};
use swingscope::logging;
use swingscope::services::{MarketDataProvider, StaticProvider};
use swingscope::signals::StructureEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let provider = StaticProvider::new().with_series(DEMO_SYMBOL, demo_candles())?;
    let candles = provider.get_candles(DEMO_SYMBOL, 500)?;
    let current_price = provider.get_latest_price(DEMO_SYMBOL)?;

    let engine = StructureEngine::new(AnalysisConfig::new(DEMO_DEPTH)?);
    let analysis = engine.analyze_default(&candles)?;

    println!(
        "{} demo ({} candles, depth {}, last {:.5})",
        DEMO_SYMBOL,
        candles.len(),
        DEMO_DEPTH,
        current_price
    );
    for point in &analysis.swing_points {
        println!("  {}  {}", point.time.format("%Y-%m-%d %H:%M"), point);
    }
    println!("Trend: {}", analysis.trend);
    println!("{}", analysis.signal);

    Ok(())
}
