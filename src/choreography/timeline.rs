#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{layout::LayoutNode, measure::TextMeasurer, spacer::Spacer, tagging::TokenState};
use crate::{config::timing_config::TimingConfig, tokenizer::token::Token};

/// A single animated property change relative to the start of the transition.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    #[must_use]
    pub fn end_ms(&self) -> f64 { self.delay_ms + self.duration_ms }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// A carried over word or kept whitespace, rendered without motion.
    Static { token: Token, state: TokenState },

    /// Removed tokens shrinking to zero width while fading out.
    Collapse {
        tokens: Vec<Token>,
        width: Tween,
        fade: Tween,
    },

    /// Inserted text growing to its measured width while its characters
    /// fade in one after the other.
    Grow {
        spacer: Spacer,
        text: String,
        width: Tween,
        chars: Vec<Tween>,
    },
}

impl RenderNode {
    /// Every tween of the node.
    #[must_use]
    pub fn tweens(&self) -> Vec<&Tween> {
        match self {
            RenderNode::Static { .. } => vec![],
            RenderNode::Collapse { width, fade, .. } => vec![width, fade],
            RenderNode::Grow { width, chars, .. } => std::iter::once(width).chain(chars).collect(),
        }
    }
}

/// The full choreography of one transition.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    nodes: Vec<RenderNode>,
    duration_ms: f64,
    settle_at_ms: f64,
    stagger_scale: f64,
}

impl Timeline {
    #[must_use]
    pub fn nodes(&self) -> &[RenderNode] { &self.nodes }

    /// The budget every tween ends within.
    #[must_use]
    pub fn duration_ms(&self) -> f64 { self.duration_ms }

    /// When the new text should replace the animated nodes.
    #[must_use]
    pub fn settle_at_ms(&self) -> f64 { self.settle_at_ms }

    /// The factor staggers were multiplied with to fit into the budget.
    #[must_use]
    pub fn stagger_scale(&self) -> f64 { self.stagger_scale }

    /// When the last tween ends, 0 without any motion.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.nodes
            .iter()
            .flat_map(RenderNode::tweens)
            .map(Tween::end_ms)
            .fold(0.0, f64::max)
    }

    /// Measure the spacers again without touching any timing.
    pub fn remeasure<M>(&mut self, measurer: &M, fallback_char_width: f64)
    where
        M: TextMeasurer + ?Sized,
    {
        for node in &mut self.nodes {
            if let RenderNode::Grow { spacer, .. } = node {
                spacer.remeasure(measurer, fallback_char_width);
            }
        }
    }
}

/// A tween whose delay is not final yet: `stagger_ms` is scaled, the rest is
/// fixed.
#[derive(Debug, Clone, Copy)]
struct Pending {
    stagger_ms: f64,
    offset_ms: f64,
    duration_ms: f64,
}

impl Pending {
    fn resolve(self, scale: f64) -> Tween {
        Tween {
            delay_ms: self.stagger_ms.mul_add(scale, self.offset_ms),
            duration_ms: self.duration_ms,
        }
    }

    /// The largest scale keeping the tween within `budget_ms`.
    fn max_scale(&self, budget_ms: f64) -> f64 {
        if self.stagger_ms > 0.0 {
            (budget_ms - self.offset_ms - self.duration_ms) / self.stagger_ms
        } else {
            f64::INFINITY
        }
    }
}

#[derive(Debug)]
enum PendingNode {
    Static(Token, TokenState),
    Collapse {
        tokens: Vec<Token>,
        width: Pending,
        fade: Pending,
    },
    Grow {
        spacer: Spacer,
        text: String,
        width: Pending,
        chars: Vec<Pending>,
    },
}

impl PendingNode {
    fn pending(&self) -> Vec<Pending> {
        match self {
            PendingNode::Static(..) => vec![],
            PendingNode::Collapse { width, fade, .. } => vec![*width, *fade],
            PendingNode::Grow { width, chars, .. } => {
                let mut result = vec![*width];
                result.extend_from_slice(chars);
                result
            }
        }
    }

    fn resolve(self, scale: f64) -> RenderNode {
        match self {
            PendingNode::Static(token, state) => RenderNode::Static { token, state },
            PendingNode::Collapse {
                tokens,
                width,
                fade,
            } => RenderNode::Collapse {
                tokens,
                width: width.resolve(scale),
                fade: fade.resolve(scale),
            },
            PendingNode::Grow {
                spacer,
                text,
                width,
                chars,
            } => RenderNode::Grow {
                spacer,
                text,
                width: width.resolve(scale),
                chars: chars.into_iter().map(|tween| tween.resolve(scale)).collect(),
            },
        }
    }
}

/// Assign delays and durations to the laid out nodes.
///
/// Node `n` starts after `n × element_stagger`, the characters of a growing
/// node after an additional reveal offset and `k × char_stagger`. A growing
/// node right after a collapsing one widens together with the collapse, so
/// that replaced words swap places smoothly. If the staggers would make
/// anything end after `duration_ms`, all of them are scaled down by the same
/// factor.
#[must_use]
pub fn schedule(nodes: Vec<LayoutNode>, duration_ms: f64, timing: &TimingConfig) -> Timeline {
    let width_ms = timing.width_fraction * duration_ms;
    let fade_out_ms = timing.fade_out_fraction * duration_ms;
    let char_fade_ms = timing.char_fade_fraction * duration_ms;
    let reveal_offset_ms = timing.reveal_offset_fraction * duration_ms;

    let mut pending_nodes = Vec::with_capacity(nodes.len());
    let mut previous_collapse_stagger: Option<f64> = None;

    for (ordinal, node) in nodes.into_iter().enumerate() {
        let base_ms = ordinal as f64 * timing.element_stagger_ms;

        let pending = match node {
            LayoutNode::Static(tagged) => PendingNode::Static(tagged.token, tagged.state),
            LayoutNode::Collapse(tagged) => PendingNode::Collapse {
                tokens: tagged.into_iter().map(|tagged| tagged.token).collect(),
                width: Pending {
                    stagger_ms: base_ms,
                    offset_ms: 0.0,
                    duration_ms: width_ms,
                },
                fade: Pending {
                    stagger_ms: base_ms,
                    offset_ms: 0.0,
                    duration_ms: fade_out_ms,
                },
            },
            LayoutNode::Grow(spacer) => {
                let text = spacer.text();
                let chars = (0..text.chars().count())
                    .map(|k| Pending {
                        stagger_ms: (k as f64).mul_add(timing.char_stagger_ms, base_ms),
                        offset_ms: reveal_offset_ms,
                        duration_ms: char_fade_ms,
                    })
                    .collect();

                PendingNode::Grow {
                    spacer,
                    text,
                    width: Pending {
                        stagger_ms: previous_collapse_stagger.unwrap_or(base_ms),
                        offset_ms: 0.0,
                        duration_ms: width_ms,
                    },
                    chars,
                }
            }
        };

        previous_collapse_stagger = match &pending {
            PendingNode::Collapse { width, .. } => Some(width.stagger_ms),
            PendingNode::Static(..) | PendingNode::Grow { .. } => None,
        };

        pending_nodes.push(pending);
    }

    let stagger_scale = pending_nodes
        .iter()
        .flat_map(PendingNode::pending)
        .map(|pending| pending.max_scale(duration_ms))
        .fold(1.0, f64::min)
        .max(0.0);

    Timeline {
        nodes: pending_nodes
            .into_iter()
            .map(|node| node.resolve(stagger_scale))
            .collect(),
        duration_ms,
        settle_at_ms: duration_ms + timing.settle_slack_ms,
        stagger_scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        choreography::{
            layout::layout,
            measure::MonospaceMeasurer,
            spacer::{SpacerLayout, derive_spacers},
            tagging::tag_tokens,
        },
        diffs::diff_tokens,
        tokenizer::word_tokenizer::word_tokenizer,
        utils::id_generator::IdGenerator,
    };

    const EPSILON: f64 = 1e-9;

    fn timeline(from: &str, to: &str, duration_ms: f64) -> Timeline {
        let mut ids = IdGenerator::new();
        let from = word_tokenizer(from, &mut ids);
        let to = word_tokenizer(to, &mut ids);

        let operations = diff_tokens(&from, &to);
        let spacers = derive_spacers(
            &operations,
            SpacerLayout::WordChunks,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut ids,
        );

        schedule(
            layout(tag_tokens(&from, &to), &operations, spacers),
            duration_ms,
            &TimingConfig::default(),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_static_text_has_no_motion() {
        let timeline = timeline("same text", "same text", 1000.0);

        assert_eq!(timeline.nodes().len(), 3);
        assert_close(timeline.end_ms(), 0.0);
        assert_close(timeline.stagger_scale(), 1.0);
        assert_close(timeline.settle_at_ms(), 1100.0);
    }

    #[test]
    fn test_replacement_grows_with_collapse() {
        let timeline = timeline("hello world", "goodbye world", 1000.0);
        let nodes = timeline.nodes();

        assert_eq!(nodes.len(), 4);
        assert_close(timeline.stagger_scale(), 1.0);

        let RenderNode::Collapse { width, fade, .. } = &nodes[0] else {
            panic!("expected a collapse, got {:?}", nodes[0]);
        };
        assert_close(width.delay_ms, 0.0);
        assert_close(width.duration_ms, 500.0);
        assert_close(fade.duration_ms, 400.0);

        let RenderNode::Grow {
            spacer,
            text,
            width,
            chars,
        } = &nodes[1]
        else {
            panic!("expected a spacer, got {:?}", nodes[1]);
        };
        assert_eq!(text, "goodbye");
        assert_close(spacer.target_width(), 70.0);
        assert_close(width.delay_ms, 0.0);
        assert_eq!(chars.len(), 7);
        assert_close(chars[0].delay_ms, 250.0);
        assert_close(chars[6].delay_ms, 550.0);
        assert_close(chars[6].end_ms(), 850.0);
    }

    #[test]
    fn test_staggers_are_scaled_into_the_budget() {
        let timeline = timeline("the quick fox", "the quick brown fox", 1000.0);

        let RenderNode::Grow { width, chars, .. } = &timeline.nodes()[4] else {
            panic!("expected a spacer, got {:?}", timeline.nodes()[4]);
        };

        let scale = 550.0 / 650.0;
        assert_close(timeline.stagger_scale(), scale);
        assert_close(width.delay_ms, 400.0 * scale);
        assert_close(chars[0].delay_ms, 400.0f64.mul_add(scale, 150.0));
        assert_close(chars[5].end_ms(), 1000.0);
        assert!(timeline.end_ms() <= 1000.0 + EPSILON);
    }

    #[test]
    fn test_long_insertions_stay_within_short_budgets() {
        let timeline = timeline(
            "a",
            "a very long caption that keeps on going and going",
            300.0,
        );

        assert!(timeline.stagger_scale() < 1.0);
        assert!(timeline.end_ms() <= 300.0 + 1e-6);
    }

    #[test]
    fn test_tweens_of_nodes() {
        let timeline = timeline("hello world", "goodbye world", 1000.0);
        let counts: Vec<usize> = timeline
            .nodes()
            .iter()
            .map(|node| node.tweens().len())
            .collect();

        assert_eq!(counts, vec![2, 8, 0, 0]);
    }
}
