use crate::indicators::error::IndicatorError;
use crate::models::Candle;

pub fn validate_depth(depth: usize) -> Result<(), IndicatorError> {
    if depth == 0 {
        return Err(IndicatorError::InvalidDepth(depth));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), IndicatorError> {
    if !price.is_finite() || price < 0.0 {
        return Err(IndicatorError::InvalidPrice(price));
    }
    Ok(())
}

/// Check OHLC consistency: finite prices and `low <= open, close <= high`.
pub fn validate_candle(index: usize, candle: &Candle) -> Result<(), IndicatorError> {
    let invalid = |reason: String| IndicatorError::InvalidCandle { index, reason };

    for (name, value) in [
        ("open", candle.open),
        ("high", candle.high),
        ("low", candle.low),
        ("close", candle.close),
    ] {
        if !value.is_finite() {
            return Err(invalid(format!("{} is not a finite number", name)));
        }
    }

    if candle.low > candle.high {
        return Err(invalid(format!(
            "low {} is above high {}",
            candle.low, candle.high
        )));
    }

    for (name, value) in [("open", candle.open), ("close", candle.close)] {
        if value < candle.low || value > candle.high {
            return Err(invalid(format!(
                "{} {} is outside the [{}, {}] range",
                name, value, candle.low, candle.high
            )));
        }
    }

    if let Some(volume) = candle.volume {
        if !volume.is_finite() || volume < 0.0 {
            return Err(invalid(format!("volume {} is negative or not finite", volume)));
        }
    }

    Ok(())
}

/// Validate every candle and require non-decreasing `time`.
pub fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        validate_candle(index, candle)?;
    }

    if let Some(offset) = candles.windows(2).position(|pair| pair[1].time < pair[0].time) {
        return Err(IndicatorError::UnsortedCandles { index: offset + 1 });
    }

    Ok(())
}
