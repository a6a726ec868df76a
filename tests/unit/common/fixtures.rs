//! Candle and swing point builders shared by the unit tests

use chrono::{DateTime, Utc};
use swingscope::models::{Candle, SwingKind, SwingPattern, SwingPoint};

const BASE_TS: i64 = 1_704_153_600;

pub fn ts(index: usize) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(BASE_TS + index as i64 * 3_600, 0).unwrap()
}

/// Candle with open/close inside the range so it passes validation.
pub fn bar(index: usize, high: f64, low: f64) -> Candle {
    let open = low + (high - low) * 0.25;
    let close = low + (high - low) * 0.75;
    Candle::new(open, high, low, close, ts(index))
}

pub fn series(ranges: &[(f64, f64)]) -> Vec<Candle> {
    ranges
        .iter()
        .enumerate()
        .map(|(i, &(high, low))| bar(i, high, low))
        .collect()
}

/// Rises to 118, pulls back to 98, rises to 125, pulls back to 104.
///
/// With depth 2 the swing points are H#2 118, L#6 98, H#10 125, L#13 104.
pub fn rising_pullback_series() -> Vec<Candle> {
    series(&[
        (105.0, 100.0),
        (110.0, 103.0),
        (118.0, 108.0),
        (112.0, 104.0),
        (108.0, 101.0),
        (104.0, 99.5),
        (102.0, 98.0),
        (106.0, 100.0),
        (112.0, 103.0),
        (119.0, 108.0),
        (125.0, 112.0),
        (118.0, 107.0),
        (112.0, 105.5),
        (109.0, 104.0),
        (113.0, 106.0),
        (117.0, 109.0),
    ])
}

/// Closes interpolated linearly between turning points; turning-point bars
/// get a 1.5x wick so they are strict extremes.
pub fn zigzag(turns: &[(usize, f64)], wick: f64) -> Vec<Candle> {
    let mut closes = vec![turns[0].1];
    for pair in turns.windows(2) {
        let (from, from_close) = pair[0];
        let (to, to_close) = pair[1];
        for step in 1..=(to - from) {
            closes.push(from_close + (to_close - from_close) * step as f64 / (to - from) as f64);
        }
    }

    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let w = if turns.iter().any(|&(t, _)| t == i) {
                wick * 1.5
            } else {
                wick
            };
            Candle::new(open, open.max(close) + w, open.min(close) - w, close, ts(i))
        })
        .collect()
}

/// Lower highs and lower lows; with depth 2 and wick 1.0 the swing points
/// are H#3 121.5, L#6 102.5, H#9 117.5, L#12 98.5, H#15 113.5.
pub fn falling_rally_series() -> Vec<Candle> {
    zigzag(
        &[
            (0, 100.0),
            (3, 120.0),
            (6, 104.0),
            (9, 116.0),
            (12, 100.0),
            (15, 112.0),
            (18, 106.0),
        ],
        1.0,
    )
}

pub fn point(index: usize, kind: SwingKind, price: f64, pattern: SwingPattern) -> SwingPoint {
    SwingPoint {
        index,
        time: ts(index),
        price,
        kind,
        pattern,
    }
}

pub fn high(index: usize, price: f64, pattern: SwingPattern) -> SwingPoint {
    point(index, SwingKind::High, price, pattern)
}

pub fn low(index: usize, price: f64, pattern: SwingPattern) -> SwingPoint {
    point(index, SwingKind::Low, price, pattern)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
