//! Illustrative EURUSD H1 series with three rising swings.
//!
//! Closes move linearly between fixed turning points. Turning-point candles
//! carry a longer wick so each pivot is a strict extremum.

use crate::models::Candle;
use chrono::{DateTime, Utc};

pub const DEMO_SYMBOL: &str = "EURUSD";
pub const DEMO_DEPTH: usize = 12;

/// 2024-01-02 00:00:00 UTC
const DEMO_START: i64 = 1_704_153_600;
const BAR_SECONDS: i64 = 3_600;
const WICK: f64 = 0.0004;

/// (bar index, close) turning points of the demo series
const TURNING_POINTS: [(usize, f64); 8] = [
    (0, 1.0850),
    (20, 1.0940),
    (36, 1.0895),
    (56, 1.0985),
    (72, 1.0945),
    (92, 1.1030),
    (108, 1.0990),
    (128, 1.1060),
];

pub fn demo_candles() -> Vec<Candle> {
    let closes = interpolate_closes();
    let mut candles = Vec::with_capacity(closes.len());

    for (i, &close) in closes.iter().enumerate() {
        let open = if i == 0 { close } else { closes[i - 1] };
        let wick = if is_turning_point(i) { WICK * 1.5 } else { WICK };
        let time = DateTime::<Utc>::from_timestamp(DEMO_START + i as i64 * BAR_SECONDS, 0)
            .unwrap_or_default();

        candles.push(
            Candle::new(open, open.max(close) + wick, open.min(close) - wick, close, time)
                .with_volume(1_000.0 + (i % 7) as f64 * 125.0),
        );
    }

    candles
}

fn interpolate_closes() -> Vec<f64> {
    let mut closes = vec![TURNING_POINTS[0].1];
    for pair in TURNING_POINTS.windows(2) {
        let (from_index, from_close) = pair[0];
        let (to_index, to_close) = pair[1];
        let bars = (to_index - from_index) as f64;
        for step in 1..=(to_index - from_index) {
            closes.push(from_close + (to_close - from_close) * step as f64 / bars);
        }
    }
    closes
}

fn is_turning_point(index: usize) -> bool {
    TURNING_POINTS.iter().any(|&(i, _)| i == index)
}
