//! Environment-driven configuration.
//!
//! Values are read from the process environment after an optional `.env`
//! file has been loaded by the binary entry points.

use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DEPTH: usize = 12;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Swing analysis parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Bars required on each side to confirm a swing point
    pub depth: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl AnalysisConfig {
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SWING_DEPTH".to_string(),
                value: depth.to_string(),
            });
        }
        Ok(Self { depth })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub analysis: AnalysisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from `APP_ENV`, `PORT` and `SWING_DEPTH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV").unwrap_or_else(|| "sandbox".to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let depth = parse_or("SWING_DEPTH", lookup("SWING_DEPTH"), DEFAULT_DEPTH)?;

        Ok(Self {
            environment,
            port,
            analysis: AnalysisConfig::new(depth)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
