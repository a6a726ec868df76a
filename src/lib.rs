//! Swing-point detection and market-structure signals over OHLC candles.

pub mod config;
pub mod core;
pub mod demo;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
