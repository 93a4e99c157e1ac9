//! The stateful side of a text transition: which text is settled, which one
//! is being animated towards and when the next thing needs to happen.
//!
//! Time never advances on its own. Every method that may schedule something
//! takes the current time in milliseconds, and `poll` has to be called at (or
//! after) `next_deadline` to let scheduled work happen.

pub mod event;
pub mod timer_slots;

use event::TransitionEvent;
use log::debug;
use timer_slots::{TimerKind, TimerSlots};

use crate::{
    choreography::{TransitionPlan, measure::TextMeasurer, plan_transition, timeline::Timeline},
    config::TransitionConfig,
    errors::ConfigError,
    tokenizer::token::Token,
    utils::id_generator::IdGenerator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Showing the settled text, nothing moves.
    Idle,

    /// A timeline is playing and the settle timer is armed.
    Animating,
}

#[derive(Debug, Clone)]
struct Animation {
    text: String,
    tokens: Vec<Token>,
    plan: TransitionPlan,
    started_at_ms: f64,
}

/// Morphs a displayed text into other texts, one cycle at a time.
///
/// ```
/// use text_transition::{MonospaceMeasurer, Phase, TextTransition, TransitionConfig};
///
/// let mut transition =
///     TextTransition::new("hello world", TransitionConfig::default(), MonospaceMeasurer::new(10.0))
///         .unwrap();
///
/// let timeline = transition.transition_to("goodbye world", 0.0);
/// assert!(timeline.end_ms() <= 1000.0);
/// assert_eq!(transition.phase(), Phase::Animating);
///
/// let deadline = transition.next_deadline().unwrap();
/// transition.poll(deadline);
///
/// assert_eq!(transition.text(), "goodbye world");
/// assert_eq!(transition.phase(), Phase::Idle);
/// ```
#[derive(Debug)]
pub struct TextTransition<M> {
    config: TransitionConfig,
    measurer: M,
    ids: IdGenerator,

    /// The settled text and its tokens, the starting point of the next cycle.
    text: String,
    tokens: Vec<Token>,

    animation: Option<Animation>,

    texts: Vec<String>,
    index: usize,

    cycle: u64,
    timers: TimerSlots,
}

impl<M> TextTransition<M>
where
    M: TextMeasurer,
{
    /// Start out idle, showing `text`.
    ///
    /// # Errors
    ///
    /// If the configuration is invalid.
    pub fn new(text: &str, config: TransitionConfig, measurer: M) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut ids = IdGenerator::new();
        let tokens = (*config.tokenizer)(text, &mut ids);

        Ok(Self {
            config,
            measurer,
            ids,
            text: text.to_owned(),
            tokens,
            animation: None,
            texts: vec![text.to_owned()],
            index: 0,
            cycle: 0,
            timers: TimerSlots::new(),
        })
    }

    /// Start showing the first of `texts` and cycle through the rest of them,
    /// moving on every `interval_ms`.
    ///
    /// # Errors
    ///
    /// If the configuration is invalid.
    pub fn from_texts(
        texts: Vec<String>,
        config: TransitionConfig,
        measurer: M,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        let first = texts.first().cloned().unwrap_or_default();

        let mut transition = Self::new(&first, config, measurer)?;
        transition.texts = texts;
        transition.arm_cycle(now_ms);

        Ok(transition)
    }

    /// Replace the texts to cycle through and restart from the first one.
    pub fn set_texts(&mut self, texts: Vec<String>, now_ms: f64) {
        self.texts = texts;
        self.index = 0;

        if let Some(first) = self.texts.first().cloned() {
            if first != self.target_text() {
                self.transition_to(&first, now_ms);
            }
        }

        self.arm_cycle(now_ms);
    }

    /// Start animating towards `to`.
    ///
    /// An animation that is still playing is cut short: its target becomes
    /// the settled text right away and its settle timer is cancelled, so
    /// only the new cycle will ever settle.
    pub fn transition_to(&mut self, to: &str, now_ms: f64) -> &Timeline {
        self.fast_forward();
        self.cycle += 1;

        let tokens = (*self.config.tokenizer)(to, &mut self.ids);
        let plan = plan_transition(
            &self.tokens,
            &tokens,
            &self.measurer,
            &self.config,
            &mut self.ids,
        );

        debug!("Starting cycle {}: '{}' -> '{to}'", self.cycle, self.text);
        self.timers
            .arm(TimerKind::Settle, now_ms + plan.timeline.settle_at_ms());

        let animation = self.animation.insert(Animation {
            text: to.to_owned(),
            tokens,
            plan,
            started_at_ms: now_ms,
        });

        &animation.plan.timeline
    }

    /// Fire every timer that is due at `now_ms`, earliest first.
    ///
    /// Each timer fires at most once per call. A poll that comes late moves
    /// the cycle on by a single text and restarts its interval from `now_ms`,
    /// missed intervals are dropped.
    pub fn poll(&mut self, now_ms: f64) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        let mut fired = Vec::with_capacity(TimerKind::ALL.len());

        while let Some((kind, deadline)) = self.timers.pop_due(now_ms) {
            if fired.contains(&kind) {
                // re-armed during this poll, e.g. for a non-finite `now_ms`
                self.timers.arm(kind, deadline);
                break;
            }
            fired.push(kind);

            let event = match kind {
                TimerKind::Settle => self.settle(),
                TimerKind::Remeasure => self.remeasure(),
                TimerKind::Cycle => self.advance(now_ms),
            };

            events.extend(event);
        }

        events
    }

    /// The container changed size. Widths are measured again once no resize
    /// happened for `remeasure_debounce_ms`.
    pub fn on_resize(&mut self, now_ms: f64) {
        self.timers.arm(
            TimerKind::Remeasure,
            now_ms + self.config.remeasure_debounce_ms,
        );
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// The text being animated towards, or the settled one when idle.
    #[must_use]
    pub fn target_text(&self) -> &str {
        self.animation
            .as_ref()
            .map_or(&self.text, |animation| &animation.text)
    }

    /// Tokens of the settled text.
    #[must_use]
    pub fn tokens(&self) -> &[Token] { &self.tokens }

    #[must_use]
    pub fn timeline(&self) -> Option<&Timeline> {
        self.plan().map(|plan| &plan.timeline)
    }

    #[must_use]
    pub fn plan(&self) -> Option<&TransitionPlan> {
        self.animation.as_ref().map(|animation| &animation.plan)
    }

    /// When the playing timeline started, its delays are relative to this.
    #[must_use]
    pub fn started_at_ms(&self) -> Option<f64> {
        self.animation
            .as_ref()
            .map(|animation| animation.started_at_ms)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.animation.is_some() {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    /// Number of transitions started so far.
    #[must_use]
    pub fn cycle(&self) -> u64 { self.cycle }

    /// Position in the cycled texts.
    #[must_use]
    pub fn index(&self) -> usize { self.index }

    #[must_use]
    pub fn texts(&self) -> &[String] { &self.texts }

    #[must_use]
    pub fn config(&self) -> &TransitionConfig { &self.config }

    /// When `poll` should be called next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> { self.timers.next_deadline() }

    fn arm_cycle(&mut self, now_ms: f64) {
        if self.texts.len() > 1 {
            self.timers
                .arm(TimerKind::Cycle, now_ms + self.config.interval_ms);
        } else {
            self.timers.cancel(TimerKind::Cycle);
        }
    }

    fn fast_forward(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.timers.cancel(TimerKind::Settle);
            debug!(
                "Cycle {} interrupted, fast-forwarding to '{}'",
                self.cycle, animation.text
            );

            self.commit(animation);
        }
    }

    fn commit(&mut self, animation: Animation) {
        self.text = animation.text;
        self.tokens = animation.tokens;
    }

    fn settle(&mut self) -> Option<TransitionEvent> {
        let animation = self.animation.take()?;
        debug!("Cycle {} settled on '{}'", self.cycle, animation.text);

        self.commit(animation);

        Some(TransitionEvent::Settled { cycle: self.cycle })
    }

    fn remeasure(&mut self) -> Option<TransitionEvent> {
        let animation = self.animation.as_mut()?;
        animation
            .plan
            .timeline
            .remeasure(&self.measurer, self.config.fallback_char_width);
        debug!("Remeasured the spacers of cycle {}", self.cycle);

        Some(TransitionEvent::Remeasured { cycle: self.cycle })
    }

    fn advance(&mut self, now_ms: f64) -> Option<TransitionEvent> {
        if self.texts.len() < 2 {
            return None;
        }

        self.index = (self.index + 1) % self.texts.len();
        self.arm_cycle(now_ms);

        let to = self.texts[self.index].clone();
        self.transition_to(&to, now_ms);

        Some(TransitionEvent::Advanced {
            cycle: self.cycle,
            index: self.index,
        })
    }
}
