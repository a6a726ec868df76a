use serde::{Deserialize, Serialize};
use std::fmt;

use super::swing::{SwingPoint, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Hold => "HOLD",
        };
        f.write_str(label)
    }
}

/// Trade recommendation derived from labeled swing points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: SignalDirection,
    pub reason: String,
    /// 0..=100
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    pub trend: Trend,
}

impl SignalResult {
    pub fn hold(reason: String, confidence: u8, trend: Trend) -> Self {
        Self {
            signal: SignalDirection::Hold,
            reason,
            confidence: confidence.min(100),
            entry_price: None,
            stop_loss: None,
            take_profit: None,
            trend,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.signal != SignalDirection::Hold
    }
}

impl fmt::Display for SignalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signal: {} ({}% confidence)", self.signal, self.confidence)?;
        if let Some(entry) = self.entry_price {
            writeln!(f, "  Entry: {:.5}", entry)?;
        }
        if let Some(stop_loss) = self.stop_loss {
            writeln!(f, "  Stop loss: {:.5}", stop_loss)?;
        }
        if let Some(take_profit) = self.take_profit {
            writeln!(f, "  Take profit: {:.5}", take_profit)?;
        }
        write!(f, "  Reason: {}", self.reason)
    }
}

/// Full output of one structure analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub depth: usize,
    pub candle_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    pub swing_points: Vec<SwingPoint>,
    pub trend: Trend,
    pub signal: SignalResult,
}
