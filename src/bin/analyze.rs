//! Analyze a JSON candle file and print swing structure and signal.

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use swingscope::config::AppConfig;
use swingscope::logging;
use swingscope::services::load_candles_file;
use swingscope::signals::StructureEngine;

#[derive(Parser, Debug)]
#[command(name = "analyze", about = "Swing-point structure analysis for a candle file")]
struct Args {
    /// JSON array of {time, open, high, low, close, volume?} candles, oldest first
    file: PathBuf,

    /// Bars on each side required to confirm a swing point (defaults to SWING_DEPTH or 12)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Current price (defaults to the last close)
    #[arg(short, long)]
    price: Option<f64>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    let engine = StructureEngine::new(config.analysis);

    let candles = load_candles_file(&args.file)?;
    let depth = args.depth.unwrap_or_else(|| engine.depth());
    let analysis = engine.analyze(&candles, depth, args.price)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("File: {}", args.file.display());
    println!("Candles: {}  Depth: {}", analysis.candle_count, analysis.depth);
    println!("Swing points:");
    for point in &analysis.swing_points {
        println!("  {}  {}", point.time.format("%Y-%m-%d %H:%M"), point);
    }
    println!("Trend: {}", analysis.trend);
    println!("{}", analysis.signal);

    Ok(())
}
