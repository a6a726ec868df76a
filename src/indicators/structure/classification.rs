//! Market-structure classification (HH / LH / HL / LL and trend)

use crate::models::{SwingKind, SwingPattern, SwingPoint, Trend};

/// Number of most recent swing points the trend is derived from
pub const TREND_WINDOW: usize = 4;

/// Label a swing point against the most recent earlier point of the same kind.
///
/// Highs compare only with highs and lows only with lows. The first high is
/// `HH` and the first low is `HL`. An equal price is not higher.
pub fn classify_pattern(kind: SwingKind, price: f64, history: &[SwingPoint]) -> SwingPattern {
    let previous = history.iter().rev().find(|p| p.kind == kind);

    match kind {
        SwingKind::High => match previous {
            Some(prev) if price <= prev.price => SwingPattern::LH,
            _ => SwingPattern::HH,
        },
        SwingKind::Low => match previous {
            Some(prev) if price <= prev.price => SwingPattern::LL,
            _ => SwingPattern::HL,
        },
    }
}

/// Recompute the pattern of every point, in order.
pub fn label_swing_points(points: &mut [SwingPoint]) {
    for i in 0..points.len() {
        let (history, rest) = points.split_at_mut(i);
        let point = &mut rest[0];
        point.pattern = classify_pattern(point.kind, point.price, history);
    }
}

/// Derive the trend from the last [`TREND_WINDOW`] swing points.
///
/// Uptrend needs at least one HH and one HL in the window, downtrend at least
/// one LL and one LH. Uptrend wins when both hold.
pub fn classify_trend(points: &[SwingPoint]) -> Trend {
    if points.len() < TREND_WINDOW {
        return Trend::Sideways;
    }

    let window = &points[points.len() - TREND_WINDOW..];
    let count = |pattern: SwingPattern| window.iter().filter(|p| p.pattern == pattern).count();

    if count(SwingPattern::HH) >= 1 && count(SwingPattern::HL) >= 1 {
        Trend::Uptrend
    } else if count(SwingPattern::LL) >= 1 && count(SwingPattern::LH) >= 1 {
        Trend::Downtrend
    } else {
        Trend::Sideways
    }
}
