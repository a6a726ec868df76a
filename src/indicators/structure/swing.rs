//! Swing point (ZigZag pivot) detection

use crate::indicators::error::IndicatorError;
use crate::indicators::structure::classification::classify_pattern;
use crate::indicators::validation::{validate_candles, validate_depth};
use crate::models::{Candle, SwingKind, SwingPoint};
use tracing::debug;

/// Detect swing highs and lows and label them with their market structure.
///
/// A candle at index `i` is a swing high when its high is strictly above the
/// highs of the `depth` candles on each side, and a swing low when its low is
/// strictly below their lows. Ties reject the candidate. An outside bar can
/// be both and is then emitted twice, high first.
///
/// Fewer than `2 * depth` candles yields an empty list.
pub fn detect_swing_points(
    candles: &[Candle],
    depth: usize,
) -> Result<Vec<SwingPoint>, IndicatorError> {
    validate_depth(depth)?;
    validate_candles(candles)?;

    // halve the length rather than double the depth: depth may be near usize::MAX
    if candles.len() / 2 < depth {
        debug!(
            candles = candles.len(),
            depth, "not enough candles for swing detection"
        );
        return Ok(Vec::new());
    }

    let mut pivots: Vec<(usize, SwingKind)> = Vec::new();
    for i in depth..candles.len().saturating_sub(depth) {
        if is_swing_high(candles, i, depth) {
            pivots.push((i, SwingKind::High));
        }
        if is_swing_low(candles, i, depth) {
            pivots.push((i, SwingKind::Low));
        }
    }
    // stable: keeps high before low on a shared index
    pivots.sort_by_key(|&(index, _)| index);

    let mut points: Vec<SwingPoint> = Vec::with_capacity(pivots.len());
    for (index, kind) in pivots {
        let candle = &candles[index];
        let price = match kind {
            SwingKind::High => candle.high,
            SwingKind::Low => candle.low,
        };
        let pattern = classify_pattern(kind, price, &points);
        points.push(SwingPoint {
            index,
            time: candle.time,
            price,
            kind,
            pattern,
        });
    }

    debug!(
        candles = candles.len(),
        depth,
        highs = points.iter().filter(|p| p.is_high()).count(),
        lows = points.iter().filter(|p| p.is_low()).count(),
        "swing detection complete"
    );

    Ok(points)
}

/// Indices of the `depth` neighbours on each side of `i`.
fn neighbours(i: usize, depth: usize) -> impl Iterator<Item = usize> {
    (i - depth..i).chain(i + 1..=i + depth)
}

fn is_swing_high(candles: &[Candle], i: usize, depth: usize) -> bool {
    let high = candles[i].high;
    neighbours(i, depth).all(|j| high > candles[j].high)
}

fn is_swing_low(candles: &[Candle], i: usize, depth: usize) -> bool {
    let low = candles[i].low;
    neighbours(i, depth).all(|j| low < candles[j].low)
}
