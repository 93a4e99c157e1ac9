#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The concerns a text transition needs to wake up for. When several timers
/// are due at the same time they fire in declaration order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Commit the target text once the animation is over.
    Settle,

    /// Measure spacer widths again after the container was resized.
    Remeasure,

    /// Move on to the next text of the cycle.
    Cycle,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [TimerKind::Settle, TimerKind::Remeasure, TimerKind::Cycle];
}

/// At most one pending deadline per `TimerKind`. Arming a slot replaces
/// whatever was pending in it, so stale timers can never fire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSlots {
    deadlines: [Option<f64>; 3],
}

impl TimerSlots {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Schedule `kind` at `deadline_ms`, returning the deadline it replaced.
    pub fn arm(&mut self, kind: TimerKind, deadline_ms: f64) -> Option<f64> {
        self.slot_mut(kind).replace(deadline_ms)
    }

    /// Returns the cancelled deadline if there was one.
    pub fn cancel(&mut self, kind: TimerKind) -> Option<f64> { self.slot_mut(kind).take() }

    #[must_use]
    pub fn deadline(&self, kind: TimerKind) -> Option<f64> { self.deadlines[kind as usize] }

    /// The earliest pending timer.
    #[must_use]
    pub fn next(&self) -> Option<(TimerKind, f64)> {
        TimerKind::ALL
            .into_iter()
            .filter_map(|kind| self.deadline(kind).map(|deadline| (kind, deadline)))
            .min_by(|(left_kind, left), (right_kind, right)| {
                left.total_cmp(right).then(left_kind.cmp(right_kind))
            })
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> { self.next().map(|(_, deadline)| deadline) }

    /// Disarm and return the earliest timer if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerKind, f64)> {
        let (kind, deadline) = self.next().filter(|&(_, deadline)| deadline <= now_ms)?;
        self.cancel(kind);

        Some((kind, deadline))
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<f64> { &mut self.deadlines[kind as usize] }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_arming_replaces() {
        let mut timers = TimerSlots::new();

        assert_eq!(timers.arm(TimerKind::Remeasure, 150.0), None);
        assert_eq!(timers.arm(TimerKind::Remeasure, 200.0), Some(150.0));
        assert_eq!(timers.deadline(TimerKind::Remeasure), Some(200.0));

        assert_eq!(timers.pop_due(199.0), None);
        assert_eq!(timers.pop_due(200.0), Some((TimerKind::Remeasure, 200.0)));
        assert_eq!(timers.next(), None);
    }

    #[test]
    fn test_earliest_fires_first() {
        let mut timers = TimerSlots::new();
        timers.arm(TimerKind::Cycle, 3000.0);
        timers.arm(TimerKind::Settle, 1100.0);

        assert_eq!(timers.next_deadline(), Some(1100.0));
        assert_eq!(timers.pop_due(5000.0), Some((TimerKind::Settle, 1100.0)));
        assert_eq!(timers.pop_due(5000.0), Some((TimerKind::Cycle, 3000.0)));
        assert_eq!(timers.pop_due(5000.0), None);
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        let mut timers = TimerSlots::new();
        timers.arm(TimerKind::Cycle, 100.0);
        timers.arm(TimerKind::Remeasure, 100.0);
        timers.arm(TimerKind::Settle, 100.0);

        let fired: Vec<TimerKind> = std::iter::from_fn(|| timers.pop_due(100.0))
            .map(|(kind, _)| kind)
            .collect();

        assert_eq!(
            fired,
            vec![TimerKind::Settle, TimerKind::Remeasure, TimerKind::Cycle]
        );
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerSlots::new();
        timers.arm(TimerKind::Settle, 10.0);

        assert_eq!(timers.cancel(TimerKind::Settle), Some(10.0));
        assert_eq!(timers.cancel(TimerKind::Settle), None);
        assert_eq!(timers.pop_due(f64::MAX), None);
    }
}
