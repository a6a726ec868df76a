use thiserror::Error;

/// Input precondition violations for the structure indicators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("candles must be ordered oldest first: candle {index} is older than its predecessor")]
    UnsortedCandles { index: usize },

    #[error("invalid candle at index {index}: {reason}")]
    InvalidCandle { index: usize, reason: String },

    #[error("invalid price: {0}")]
    InvalidPrice(f64),
}
