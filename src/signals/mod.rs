//! Signal generation from market structure.

pub mod engine;
pub mod signal_generator;

pub use engine::StructureEngine;
pub use signal_generator::{generate_signal, SignalConfig, SignalGenerator};
