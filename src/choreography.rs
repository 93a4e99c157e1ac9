//! Turning an edit script into an animation: which old tokens stay, which
//! collapse, where inserted text grows and when each of these happens.

pub mod layout;
pub mod measure;
pub mod spacer;
pub mod tagging;
pub mod timeline;

use log::debug;
use measure::TextMeasurer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use timeline::Timeline;

use crate::{
    config::TransitionConfig,
    diffs::{diff_tokens, edit_op::EditOp},
    tokenizer::token::Token,
    utils::id_generator::IdGenerator,
};

/// The edit script of a transition together with its choreography.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub operations: Vec<EditOp>,
    pub timeline: Timeline,
}

/// Plan the transition from the tokens of one text to those of another.
///
/// Spacer ids are drawn from `ids`. The result only depends on the inputs,
/// measuring is the only side effect.
///
/// ```
/// use text_transition::{
///     IdGenerator, MonospaceMeasurer, RenderNode, TransitionConfig, plan_transition,
///     word_tokenizer,
/// };
///
/// let mut ids = IdGenerator::new();
/// let from = word_tokenizer("hello world", &mut ids);
/// let to = word_tokenizer("goodbye world", &mut ids);
///
/// let plan = plan_transition(
///     &from,
///     &to,
///     &MonospaceMeasurer::new(10.0),
///     &TransitionConfig::default(),
///     &mut ids,
/// );
///
/// assert!(matches!(plan.timeline.nodes()[0], RenderNode::Collapse { .. }));
/// assert!(plan.timeline.end_ms() <= 1000.0);
/// ```
pub fn plan_transition<M>(
    from: &[Token],
    to: &[Token],
    measurer: &M,
    config: &TransitionConfig,
    ids: &mut IdGenerator,
) -> TransitionPlan
where
    M: TextMeasurer + ?Sized,
{
    let operations = diff_tokens(from, to);
    let spacers = spacer::derive_spacers(
        &operations,
        config.spacer_layout,
        measurer,
        config.fallback_char_width,
        ids,
    );
    let nodes = layout::layout(tagging::tag_tokens(from, to), &operations, spacers);
    let timeline = timeline::schedule(nodes, config.duration_ms, &config.timing);

    debug!(
        "Planned transition with {} operations into {} nodes (stagger scale: {:.3})",
        operations.len(),
        timeline.nodes().len(),
        timeline.stagger_scale()
    );

    TransitionPlan {
        operations,
        timeline,
    }
}
