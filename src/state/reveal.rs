/// Fire-once latch for scroll reveals. Once set it stays set for the
/// lifetime of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed the latest visibility. Returns `true` only on the call that
    /// first sees the element visible.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_visible() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn fires_exactly_once_across_reentries() {
        let mut latch = RevealLatch::default();
        let fired = [false, true, false, true, true, false, true]
            .into_iter()
            .filter(|&visible| latch.observe(visible))
            .count();

        assert_eq!(fired, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn leaving_the_viewport_does_not_reset() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_revealed());
    }

    #[test]
    fn latches_are_independent() {
        let mut skills = RevealLatch::default();
        let projects = RevealLatch::default();
        skills.observe(true);
        assert!(skills.is_revealed());
        assert!(!projects.is_revealed());
    }
}
