/// Vertical scroll offset past which the header switches to its compact style.
const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Open/closed state of the mobile navigation drawer. Only explicit actions
/// change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following a link collapses the drawer; hands the anchor back to the caller.
    pub fn select<'a>(&mut self, target: &'a str) -> &'a str {
        self.open = false;
        target
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn no_hysteresis_on_the_way_back() {
        let states: Vec<_> = [0.0, 60.0, 49.0, 51.0].into_iter().map(is_scrolled).collect();
        assert_eq!(states, [false, true, false, true]);
    }

    #[test]
    fn menu_opens_and_closes_explicitly() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.open();
        menu.open();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_a_target_collapses() {
        let mut menu = MobileMenu::default();
        menu.open();
        assert_eq!(menu.select("#projects"), "#projects");
        assert!(!menu.is_open());
    }
}
