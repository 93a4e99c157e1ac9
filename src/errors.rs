use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a positive number of milliseconds, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },

    #[error("{name} must be between 0 and 1, got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error(
        "The character reveal ({reveal_offset} + {char_fade}) does not fit into the duration \
         budget"
    )]
    PhaseExceedsBudget { reveal_offset: f64, char_fade: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeValue { name: &'static str, value: f64 },

    #[cfg(feature = "serde")]
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
