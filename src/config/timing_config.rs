use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        DEFAULT_CHAR_FADE_FRACTION, DEFAULT_CHAR_STAGGER_MS, DEFAULT_ELEMENT_STAGGER_MS,
        DEFAULT_FADE_OUT_FRACTION, DEFAULT_REVEAL_OFFSET_FRACTION, DEFAULT_SETTLE_SLACK_MS,
        DEFAULT_WIDTH_FRACTION,
    },
    errors::ConfigError,
};

/// How a transition's duration budget is split between its phases.
///
/// Fractions are relative to the transition's duration, staggers are absolute
/// and get scaled down uniformly when they would push an animation past the
/// end of the budget.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Width tween of collapsing and growing nodes.
    #[cfg_attr(feature = "serde", serde(default = "default_width_fraction"))]
    pub width_fraction: f64,

    /// Opacity and blur tween of collapsing nodes.
    #[cfg_attr(feature = "serde", serde(default = "default_fade_out_fraction"))]
    pub fade_out_fraction: f64,

    /// Fade-in of a single inserted character.
    #[cfg_attr(feature = "serde", serde(default = "default_char_fade_fraction"))]
    pub char_fade_fraction: f64,

    /// How long after its node starts the first character of an insertion
    /// starts fading in.
    #[cfg_attr(feature = "serde", serde(default = "default_reveal_offset_fraction"))]
    pub reveal_offset_fraction: f64,

    /// Delay between consecutive nodes.
    #[cfg_attr(feature = "serde", serde(default = "default_element_stagger_ms"))]
    pub element_stagger_ms: f64,

    /// Delay between consecutive characters of an insertion.
    #[cfg_attr(feature = "serde", serde(default = "default_char_stagger_ms"))]
    pub char_stagger_ms: f64,

    /// Time between the end of the budget and committing the new text.
    #[cfg_attr(feature = "serde", serde(default = "default_settle_slack_ms"))]
    pub settle_slack_ms: f64,
}

fn default_width_fraction() -> f64 {
    debug!("Using default width fraction: {DEFAULT_WIDTH_FRACTION}");
    DEFAULT_WIDTH_FRACTION
}

fn default_fade_out_fraction() -> f64 {
    debug!("Using default fade-out fraction: {DEFAULT_FADE_OUT_FRACTION}");
    DEFAULT_FADE_OUT_FRACTION
}

fn default_char_fade_fraction() -> f64 {
    debug!("Using default character fade fraction: {DEFAULT_CHAR_FADE_FRACTION}");
    DEFAULT_CHAR_FADE_FRACTION
}

fn default_reveal_offset_fraction() -> f64 {
    debug!("Using default reveal offset fraction: {DEFAULT_REVEAL_OFFSET_FRACTION}");
    DEFAULT_REVEAL_OFFSET_FRACTION
}

fn default_element_stagger_ms() -> f64 {
    debug!("Using default element stagger (ms): {DEFAULT_ELEMENT_STAGGER_MS}");
    DEFAULT_ELEMENT_STAGGER_MS
}

fn default_char_stagger_ms() -> f64 {
    debug!("Using default character stagger (ms): {DEFAULT_CHAR_STAGGER_MS}");
    DEFAULT_CHAR_STAGGER_MS
}

fn default_settle_slack_ms() -> f64 {
    debug!("Using default settle slack (ms): {DEFAULT_SETTLE_SLACK_MS}");
    DEFAULT_SETTLE_SLACK_MS
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            width_fraction: default_width_fraction(),
            fade_out_fraction: default_fade_out_fraction(),
            char_fade_fraction: default_char_fade_fraction(),
            reveal_offset_fraction: default_reveal_offset_fraction(),
            element_stagger_ms: default_element_stagger_ms(),
            char_stagger_ms: default_char_stagger_ms(),
            settle_slack_ms: default_settle_slack_ms(),
        }
    }
}

impl TimingConfig {
    /// Check that every phase fits into the budget on its own, which is what
    /// makes stagger scaling always succeed.
    ///
    /// # Errors
    ///
    /// If a fraction is outside `[0, 1]`, the character reveal cannot finish
    /// within the budget even without staggering, or a stagger is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width_fraction", self.width_fraction),
            ("fade_out_fraction", self.fade_out_fraction),
            ("char_fade_fraction", self.char_fade_fraction),
            ("reveal_offset_fraction", self.reveal_offset_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }

        if self.reveal_offset_fraction + self.char_fade_fraction > 1.0 {
            return Err(ConfigError::PhaseExceedsBudget {
                reveal_offset: self.reveal_offset_fraction,
                char_fade: self.char_fade_fraction,
            });
        }

        for (name, value) in [
            ("element_stagger_ms", self.element_stagger_ms),
            ("char_stagger_ms", self.char_stagger_ms),
            ("settle_slack_ms", self.settle_slack_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeValue { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TimingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_fraction_out_of_range() {
        let config = TimingConfig {
            width_fraction: 1.5,
            ..TimingConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FractionOutOfRange {
                name: "width_fraction",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan_fraction() {
        let config = TimingConfig {
            fade_out_fraction: f64::NAN,
            ..TimingConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_reveal_longer_than_budget() {
        let config = TimingConfig {
            reveal_offset_fraction: 0.6,
            char_fade_fraction: 0.5,
            ..TimingConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::PhaseExceedsBudget { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_stagger() {
        let config = TimingConfig {
            char_stagger_ms: -1.0,
            ..TimingConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeValue {
                name: "char_stagger_ms",
                ..
            })
        ));
    }
}
