use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use timing_config::TimingConfig;

use crate::{
    BuiltinTokenizer,
    choreography::spacer::SpacerLayout,
    consts::{
        DEFAULT_DURATION_MS, DEFAULT_FALLBACK_CHAR_WIDTH, DEFAULT_INTERVAL_MS,
        DEFAULT_REMEASURE_DEBOUNCE_MS,
    },
    errors::ConfigError,
};

pub mod timing_config;

/// Everything that can be tuned about a text transition.
///
/// With the `serde` feature it can be loaded from YAML, any field left out
/// takes its default:
///
/// ```yaml
/// duration_ms: 800
/// spacer_layout: whole
/// timing:
///   char_stagger_ms: 30
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    /// The budget every animation of a transition has to fit into.
    #[cfg_attr(feature = "serde", serde(default = "default_duration_ms"))]
    pub duration_ms: f64,

    /// Time between two texts when cycling.
    #[cfg_attr(feature = "serde", serde(default = "default_interval_ms"))]
    pub interval_ms: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: TimingConfig,

    #[cfg_attr(feature = "serde", serde(default))]
    pub spacer_layout: SpacerLayout,

    #[cfg_attr(feature = "serde", serde(default))]
    pub tokenizer: BuiltinTokenizer,

    /// Width of a character in pixels when the measurer cannot tell.
    #[cfg_attr(feature = "serde", serde(default = "default_fallback_char_width"))]
    pub fallback_char_width: f64,

    /// Quiet period after the last resize before widths are measured again.
    #[cfg_attr(feature = "serde", serde(default = "default_remeasure_debounce_ms"))]
    pub remeasure_debounce_ms: f64,
}

fn default_duration_ms() -> f64 {
    debug!("Using default transition duration (ms): {DEFAULT_DURATION_MS}");
    DEFAULT_DURATION_MS
}

fn default_interval_ms() -> f64 {
    debug!("Using default cycle interval (ms): {DEFAULT_INTERVAL_MS}");
    DEFAULT_INTERVAL_MS
}

fn default_fallback_char_width() -> f64 {
    debug!("Using default fallback character width: {DEFAULT_FALLBACK_CHAR_WIDTH}");
    DEFAULT_FALLBACK_CHAR_WIDTH
}

fn default_remeasure_debounce_ms() -> f64 {
    debug!("Using default remeasure debounce (ms): {DEFAULT_REMEASURE_DEBOUNCE_MS}");
    DEFAULT_REMEASURE_DEBOUNCE_MS
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            interval_ms: default_interval_ms(),
            timing: TimingConfig::default(),
            spacer_layout: SpacerLayout::default(),
            tokenizer: BuiltinTokenizer::default(),
            fallback_char_width: default_fallback_char_width(),
            remeasure_debounce_ms: default_remeasure_debounce_ms(),
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// # Errors
    ///
    /// If the YAML is malformed or the configuration is invalid.
    #[cfg(feature = "serde")]
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Returns the same configuration with a different duration budget.
    #[must_use]
    pub fn with_duration_ms(self, duration_ms: f64) -> Self { Self { duration_ms, ..self } }

    /// # Errors
    ///
    /// If a duration is not positive, a width or debounce is negative, or the
    /// timing configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("duration_ms", self.duration_ms),
            ("interval_ms", self.interval_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }

        for (name, value) in [
            ("fallback_char_width", self.fallback_char_width),
            ("remeasure_debounce_ms", self.remeasure_debounce_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeValue { name, value });
            }
        }

        self.timing.validate()
    }
}
