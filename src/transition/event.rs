#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happened while polling a `TextTransition`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionEvent {
    /// Cycling moved on to the text at `index` and started `cycle`.
    Advanced { cycle: u64, index: usize },

    /// The animation of `cycle` is over and its target text is now settled.
    Settled { cycle: u64 },

    /// The spacers of `cycle` have been measured again.
    Remeasured { cycle: u64 },
}

impl TransitionEvent {
    #[must_use]
    pub fn cycle(&self) -> u64 {
        match self {
            TransitionEvent::Advanced { cycle, .. }
            | TransitionEvent::Settled { cycle }
            | TransitionEvent::Remeasured { cycle } => *cycle,
        }
    }
}
