//! Shared data models spanning the engine layers.

pub mod candle;
pub mod signal;
pub mod swing;

pub use candle::Candle;
pub use signal::{SignalDirection, SignalResult, StructureAnalysis};
pub use swing::{SwingKind, SwingPattern, SwingPoint, Trend};
