pub const DEFAULT_DURATION_MS: f64 = 1000.0;
pub const DEFAULT_INTERVAL_MS: f64 = 3000.0;
pub const DEFAULT_REMEASURE_DEBOUNCE_MS: f64 = 150.0;
pub const DEFAULT_FALLBACK_CHAR_WIDTH: f64 = 12.0;

pub const DEFAULT_WIDTH_FRACTION: f64 = 0.5;
pub const DEFAULT_FADE_OUT_FRACTION: f64 = 0.4;
pub const DEFAULT_CHAR_FADE_FRACTION: f64 = 0.3;
pub const DEFAULT_REVEAL_OFFSET_FRACTION: f64 = 0.15;

pub const DEFAULT_ELEMENT_STAGGER_MS: f64 = 100.0;
pub const DEFAULT_CHAR_STAGGER_MS: f64 = 50.0;
pub const DEFAULT_SETTLE_SLACK_MS: f64 = 100.0;
