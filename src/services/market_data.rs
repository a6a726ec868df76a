//! Market data provider interface and file-backed implementations.

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_candles;
use crate::models::Candle;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candles from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("no candles available for {0}")]
    EmptySeries(String),

    #[error(transparent)]
    Validation(#[from] IndicatorError),
}

pub trait MarketDataProvider {
    /// Get up to `limit` of the newest candles for a symbol, oldest first
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, ProviderError>;

    /// Get the latest close for a symbol
    fn get_latest_price(&self, symbol: &str) -> Result<f64, ProviderError> {
        self.get_candles(symbol, 1)?
            .last()
            .map(|c| c.close)
            .ok_or_else(|| ProviderError::EmptySeries(symbol.to_string()))
    }
}

fn newest(mut candles: Vec<Candle>, limit: usize) -> Vec<Candle> {
    if candles.len() > limit {
        candles.drain(..candles.len() - limit);
    }
    candles
}

/// Load and validate a JSON array of candles.
pub fn load_candles_file(path: &Path) -> Result<Vec<Candle>, ProviderError> {
    let raw = fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let candles: Vec<Candle> =
        serde_json::from_str(&raw).map_err(|source| ProviderError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_candles(&candles)?;

    debug!(path = %path.display(), candles = candles.len(), "loaded candle file");
    Ok(candles)
}

/// Reads `<SYMBOL>.json` files from a directory.
pub struct JsonFileProvider {
    directory: PathBuf,
}

impl JsonFileProvider {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.directory.join(format!("{}.json", symbol))
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, ProviderError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(ProviderError::UnknownSymbol(symbol.to_string()));
        }
        Ok(newest(load_candles_file(&path)?, limit))
    }
}

/// In-memory candle series keyed by symbol.
#[derive(Default)]
pub struct StaticProvider {
    series: HashMap<String, Vec<Candle>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(
        mut self,
        symbol: impl Into<String>,
        candles: Vec<Candle>,
    ) -> Result<Self, ProviderError> {
        validate_candles(&candles)?;
        self.series.insert(symbol.into(), candles);
        Ok(self)
    }

    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.series.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl MarketDataProvider for StaticProvider {
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, ProviderError> {
        let candles = self
            .series
            .get(symbol)
            .ok_or_else(|| ProviderError::UnknownSymbol(symbol.to_string()))?;
        Ok(newest(candles.clone(), limit))
    }
}
