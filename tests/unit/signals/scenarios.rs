//! End-to-end market structure scenarios

use crate::fixtures::{assert_close, falling_rally_series, rising_pullback_series};
use swingscope::demo::{demo_candles, DEMO_DEPTH};
use swingscope::indicators::structure::{classify_trend, detect_swing_points};
use swingscope::models::{SignalDirection, SwingKind, SwingPattern, Trend};
use swingscope::signals::{generate_signal, StructureEngine};

#[test]
fn test_rising_series_produces_buy_at_higher_low() {
    let points = detect_swing_points(&rising_pullback_series(), 2).unwrap();
    assert_eq!(classify_trend(&points), Trend::Uptrend);

    let last = points.last().unwrap();
    assert_eq!(last.index, 13);
    assert_eq!(last.kind, SwingKind::Low);
    assert_eq!(last.pattern, SwingPattern::HL);

    let signal = generate_signal(&points, 109.0);
    assert_eq!(signal.signal, SignalDirection::Buy);
    assert_close(signal.entry_price.unwrap(), 104.0);
    assert_close(signal.take_profit.unwrap(), 127.5);
    assert_close(signal.stop_loss.unwrap(), 97.02);
}

#[test]
fn test_falling_series_produces_sell_at_lower_high() {
    let points = detect_swing_points(&falling_rally_series(), 2).unwrap();
    assert_eq!(classify_trend(&points), Trend::Downtrend);

    let signal = generate_signal(&points, 110.0);
    assert_eq!(signal.signal, SignalDirection::Sell);
    assert_close(signal.entry_price.unwrap(), 113.5);
    assert_close(signal.stop_loss.unwrap(), 117.5 * 1.01);
    assert_close(signal.take_profit.unwrap(), 98.5 * 0.98);
}

#[test]
fn test_truncated_series_holds_until_structure_completes() {
    // Cut before the second pullback is confirmed
    let candles = rising_pullback_series()[..15].to_vec();
    let points = detect_swing_points(&candles, 2).unwrap();
    assert_eq!(points.len(), 3);

    let signal = generate_signal(&points, 118.0);
    assert_eq!(signal.signal, SignalDirection::Hold);
    assert_eq!(signal.confidence, 0);
}

#[test]
fn test_demo_series_signals_buy() {
    let candles = demo_candles();
    let engine = StructureEngine::default();
    let analysis = engine.analyze(&candles, DEMO_DEPTH, None).unwrap();

    assert_eq!(analysis.trend, Trend::Uptrend);
    assert_eq!(analysis.signal.signal, SignalDirection::Buy);

    let lows: Vec<f64> = analysis
        .swing_points
        .iter()
        .filter(|p| p.is_low())
        .map(|p| p.price)
        .collect();
    let highs: Vec<f64> = analysis
        .swing_points
        .iter()
        .filter(|p| p.is_high())
        .map(|p| p.price)
        .collect();

    assert_close(analysis.signal.entry_price.unwrap(), lows[2]);
    assert_close(analysis.signal.stop_loss.unwrap(), lows[1] * 0.99);
    assert_close(analysis.signal.take_profit.unwrap(), highs[2] * 1.02);
}

#[test]
fn test_repeated_runs_are_identical() {
    let engine = StructureEngine::default();
    let candles = demo_candles();
    let first = engine.analyze(&candles, DEMO_DEPTH, None).unwrap();
    let second = engine.analyze(&candles, DEMO_DEPTH, None).unwrap();
    assert_eq!(first, second);
}
