/// How the user backed out of an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Modal showing the details of one selected item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailOverlay<T> {
    #[default]
    Closed,
    Open(T),
}

impl<T: PartialEq> DetailOverlay<T> {
    /// Opens on `item`, replacing whatever was shown without closing first.
    pub fn select(&mut self, item: T) {
        *self = Self::Open(item);
    }

    /// Returns `true` if this call closed the overlay; dismissing a closed
    /// overlay is a no-op.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if matches!(self, Self::Closed) {
            return false;
        }
        log::debug!("detail overlay dismissed via {reason:?}");
        *self = Self::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }

    pub fn is_showing(&self, item: &T) -> bool {
        self.selected() == Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let overlay = DetailOverlay::<&str>::default();
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn selecting_another_item_switches_directly() {
        let mut overlay = DetailOverlay::Closed;
        overlay.select("1");
        assert_eq!(overlay, DetailOverlay::Open("1"));

        overlay.select("3");
        assert_eq!(overlay, DetailOverlay::Open("3"));
        assert!(overlay.is_showing(&"3"));
        assert!(!overlay.is_showing(&"1"));
    }

    #[test]
    fn every_dismiss_path_closes() {
        for reason in [
            DismissReason::CloseButton,
            DismissReason::Backdrop,
            DismissReason::Escape,
        ] {
            let mut overlay = DetailOverlay::Closed;
            overlay.select("2");
            assert!(overlay.dismiss(reason));
            assert_eq!(overlay, DetailOverlay::Closed);
        }
    }

    #[test]
    fn repeated_dismiss_is_idempotent() {
        let mut overlay = DetailOverlay::Open("1");
        assert!(overlay.dismiss(DismissReason::Backdrop));
        assert!(!overlay.dismiss(DismissReason::Backdrop));
        assert!(!overlay.dismiss(DismissReason::CloseButton));
        assert_eq!(overlay, DetailOverlay::Closed);
    }

    #[test]
    fn reopens_after_dismiss() {
        let mut overlay = DetailOverlay::Open("1");
        overlay.dismiss(DismissReason::Escape);
        overlay.select("1");
        assert!(overlay.is_open());
    }
}
