//! End-to-end structure analysis: candles to swing points, trend and signal.

use crate::config::AnalysisConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::structure::{classify_trend, detect_swing_points};
use crate::indicators::validation::validate_price;
use crate::models::{Candle, StructureAnalysis};
use crate::signals::signal_generator::SignalGenerator;
use tracing::info;

pub struct StructureEngine {
    config: AnalysisConfig,
    generator: SignalGenerator,
}

impl Default for StructureEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl StructureEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            generator: SignalGenerator::default(),
        }
    }

    pub fn with_generator(mut self, generator: SignalGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Analyze with the configured depth and the last close as current price.
    pub fn analyze_default(&self, candles: &[Candle]) -> Result<StructureAnalysis, IndicatorError> {
        self.analyze(candles, self.config.depth, None)
    }

    /// Run detection, classification and signal generation.
    ///
    /// `current_price` falls back to the close of the last candle.
    pub fn analyze(
        &self,
        candles: &[Candle],
        depth: usize,
        current_price: Option<f64>,
    ) -> Result<StructureAnalysis, IndicatorError> {
        if let Some(price) = current_price {
            validate_price(price)?;
        }

        let swing_points = detect_swing_points(candles, depth)?;
        let trend = classify_trend(&swing_points);
        let current_price = current_price.or_else(|| candles.last().map(|c| c.close));
        let signal = self
            .generator
            .generate_signal(&swing_points, current_price.unwrap_or(0.0));

        info!(
            candles = candles.len(),
            depth,
            swing_points = swing_points.len(),
            trend = %trend,
            signal = %signal.signal,
            confidence = signal.confidence,
            "structure analysis complete"
        );

        Ok(StructureAnalysis {
            depth,
            candle_count: candles.len(),
            current_price,
            swing_points,
            trend,
            signal,
        })
    }
}
