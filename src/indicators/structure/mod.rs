pub mod classification;
pub mod swing;

pub use classification::{classify_pattern, classify_trend, label_swing_points, TREND_WINDOW};
pub use swing::detect_swing_points;
