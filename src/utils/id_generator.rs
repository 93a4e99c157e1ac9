/// Hands out increasing ids for rendering keys. Each `TextTransition` owns its
/// own generators, there is no process-wide counter.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the next id and advances the counter.
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut ids = IdGenerator::new();

        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_generators_are_independent() {
        let mut first = IdGenerator::new();
        let mut second = IdGenerator::new();

        first.next_id();
        first.next_id();

        assert_eq!(second.next_id(), 0);
        assert_eq!(first.next_id(), 2);
    }
}
