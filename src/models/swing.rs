//! Swing points and market-structure labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extremum a swing point marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingKind {
    High,
    Low,
}

/// Relationship of a swing point to the previous swing point of the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingPattern {
    /// Higher high
    HH,
    /// Lower high
    LH,
    /// Higher low
    HL,
    /// Lower low
    LL,
}

impl SwingPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwingPattern::HH => "HH",
            SwingPattern::LH => "LH",
            SwingPattern::HL => "HL",
            SwingPattern::LL => "LL",
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, SwingPattern::HH | SwingPattern::HL)
    }
}

impl fmt::Display for SwingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local extremum detected in a candle series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    /// Position in the candle series
    pub index: usize,
    pub time: DateTime<Utc>,
    /// Candle high for swing highs, candle low for swing lows
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: SwingKind,
    pub pattern: SwingPattern,
}

impl SwingPoint {
    pub fn is_high(&self) -> bool {
        self.kind == SwingKind::High
    }

    pub fn is_low(&self) -> bool {
        self.kind == SwingKind::Low
    }
}

impl fmt::Display for SwingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} @ #{}", self.pattern, self.price, self.index)
    }
}

/// Aggregate trend derived from the most recent swing points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Uptrend,
    Downtrend,
    Sideways,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Uptrend => "UPTREND",
            Trend::Downtrend => "DOWNTREND",
            Trend::Sideways => "SIDEWAYS",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
