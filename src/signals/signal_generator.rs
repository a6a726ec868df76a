//! Pullback signals from labeled swing points.

use crate::indicators::structure::{classify_trend, TREND_WINDOW};
use crate::models::{SignalDirection, SignalResult, SwingKind, SwingPattern, SwingPoint, Trend};
use tracing::debug;

/// Price factors and confidences used by [`SignalGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct SignalConfig {
    /// Applied to the swing low before a higher low
    pub buy_stop_factor: f64,
    pub buy_stop_fallback: f64,
    /// Applied to the latest swing high
    pub buy_target_factor: f64,
    pub buy_target_fallback: f64,
    /// Applied to the swing high before a lower high
    pub sell_stop_factor: f64,
    pub sell_stop_fallback: f64,
    /// Applied to the latest swing low
    pub sell_target_factor: f64,
    pub sell_target_fallback: f64,
    pub trade_confidence: u8,
    pub hold_confidence: u8,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            buy_stop_factor: 0.99,
            buy_stop_fallback: 0.98,
            buy_target_factor: 1.02,
            buy_target_fallback: 1.05,
            sell_stop_factor: 1.01,
            sell_stop_fallback: 1.02,
            sell_target_factor: 0.98,
            sell_target_fallback: 0.95,
            trade_confidence: 75,
            hold_confidence: 30,
        }
    }
}

pub struct SignalGenerator {
    config: SignalConfig,
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

impl SignalGenerator {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Propose BUY on a higher low in an uptrend, SELL on a lower high in a
    /// downtrend, HOLD otherwise.
    ///
    /// `points` must be ordered by index. `current_price` does not affect
    /// the decision.
    pub fn generate_signal(&self, points: &[SwingPoint], current_price: f64) -> SignalResult {
        let last = match points.last() {
            Some(last) if points.len() >= TREND_WINDOW => last,
            _ => {
                return SignalResult::hold(
                    format!(
                        "Not enough swing points: need {}, got {}",
                        TREND_WINDOW,
                        points.len()
                    ),
                    0,
                    Trend::Sideways,
                );
            }
        };

        let trend = classify_trend(points);
        debug!(
            trend = %trend,
            last_index = last.index,
            last_pattern = %last.pattern,
            current_price,
            "evaluating swing structure"
        );

        match (trend, last.kind, last.pattern) {
            (Trend::Uptrend, SwingKind::Low, SwingPattern::HL) => self.buy(points, last, trend),
            (Trend::Downtrend, SwingKind::High, SwingPattern::LH) => self.sell(points, last, trend),
            _ => SignalResult::hold(
                format!("Trend is {}, waiting for a pullback setup", trend),
                self.config.hold_confidence,
                trend,
            ),
        }
    }

    fn buy(&self, points: &[SwingPoint], last: &SwingPoint, trend: Trend) -> SignalResult {
        let stop_loss = previous_of_kind(points, SwingKind::Low, last.index)
            .map(|low| low.price * self.config.buy_stop_factor)
            .unwrap_or(last.price * self.config.buy_stop_fallback);
        let take_profit = latest_of_kind(points, SwingKind::High)
            .map(|high| high.price * self.config.buy_target_factor)
            .unwrap_or(last.price * self.config.buy_target_fallback);

        SignalResult {
            signal: SignalDirection::Buy,
            reason: format!("Uptrend pullback to higher low at {:.2}", last.price),
            confidence: self.config.trade_confidence.min(100),
            entry_price: Some(last.price),
            stop_loss: Some(stop_loss),
            take_profit: Some(take_profit),
            trend,
        }
    }

    fn sell(&self, points: &[SwingPoint], last: &SwingPoint, trend: Trend) -> SignalResult {
        let stop_loss = previous_of_kind(points, SwingKind::High, last.index)
            .map(|high| high.price * self.config.sell_stop_factor)
            .unwrap_or(last.price * self.config.sell_stop_fallback);
        let take_profit = latest_of_kind(points, SwingKind::Low)
            .map(|low| low.price * self.config.sell_target_factor)
            .unwrap_or(last.price * self.config.sell_target_fallback);

        SignalResult {
            signal: SignalDirection::Sell,
            reason: format!("Downtrend pullback to lower high at {:.2}", last.price),
            confidence: self.config.trade_confidence.min(100),
            entry_price: Some(last.price),
            stop_loss: Some(stop_loss),
            take_profit: Some(take_profit),
            trend,
        }
    }
}

/// Signal with the default factors.
pub fn generate_signal(points: &[SwingPoint], current_price: f64) -> SignalResult {
    SignalGenerator::default().generate_signal(points, current_price)
}

fn previous_of_kind(points: &[SwingPoint], kind: SwingKind, before: usize) -> Option<&SwingPoint> {
    points
        .iter()
        .rev()
        .find(|p| p.kind == kind && p.index < before)
}

fn latest_of_kind(points: &[SwingPoint], kind: SwingKind) -> Option<&SwingPoint> {
    points.iter().rev().find(|p| p.kind == kind)
}
