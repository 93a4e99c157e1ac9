//! Token-level text diffing and animation choreography for morphing one
//! displayed text into another.
//!
//! A transition tokenizes both texts, diffs the tokens with an LCS, decides
//! which old words are carried over and which collapse, measures the inserted
//! spans and schedules every motion so that the whole transition fits into a
//! duration budget. Painting is left to whatever consumes the `Timeline`.

mod choreography;
mod config;
mod consts;
mod diffs;
mod errors;
mod tokenizer;
mod transition;
mod utils;

pub use choreography::{
    TransitionPlan,
    layout::LayoutNode,
    measure::{FallbackMeasurer, MonospaceMeasurer, TextMeasurer, measure_width},
    plan_transition,
    spacer::{Spacer, SpacerLayout, join_items},
    tagging::{TaggedToken, TokenState, tag_tokens},
    timeline::{RenderNode, Timeline, Tween},
};
pub use config::{TransitionConfig, timing_config::TimingConfig};
pub use diffs::{
    diff_tokens,
    edit_op::{EditKind, EditOp, is_identity, reconstruct},
    lcs::diff,
};
pub use errors::ConfigError;
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, join_tokens,
    punctuation_tokenizer::punctuation_tokenizer,
    token::{Token, TokenKind},
    word_tokenizer::{split_runs, word_tokenizer},
};
pub use transition::{
    Phase, TextTransition,
    event::TransitionEvent,
    timer_slots::{TimerKind, TimerSlots},
};
pub use utils::{id_generator::IdGenerator, side::Side};

#[cfg(feature = "wasm")]
pub mod wasm;
