//! State holders for the page's three interactive controls.
//!
//! Each control owns exactly one piece of ephemeral state: the mobile
//! drawer flag, the booking modal flag, and the expanded FAQ index. The
//! structs are `Copy` so a component can snapshot, mutate and set them
//! through a `use_state` handle; rendering is a pure function of the
//! current value.

/// Mobile navigation drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flips the drawer open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the drawer. Every nav link click routes through here so the
    /// overlay never lingers over the section being scrolled to.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Booking modal visibility. Closing is always permitted, whatever came
/// before; opening twice is the same as opening once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Which FAQ entry is expanded, if any. At most one entry is ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqState {
    expanded: Option<usize>,
}

impl FaqState {
    /// The first question starts expanded.
    pub fn new() -> Self {
        Self { expanded: Some(0) }
    }

    /// Expands `index`, or collapses it when it is already the open entry.
    /// Calls are synchronous, so a burst of clicks resolves with the last
    /// one winning.
    pub fn toggle(&mut self, index: usize) {
        if self.expanded == Some(index) {
            self.expanded = None;
        } else {
            self.expanded = Some(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

impl Default for FaqState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_menu_toggle_flips() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_modal_starts_closed() {
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn test_modal_open_then_close() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_close_without_open_is_noop() {
        let mut modal = ModalState::default();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_repeated_open_single_close() {
        let mut modal = ModalState::default();
        modal.open();
        modal.open();
        modal.open();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_faq_first_question_open_by_default() {
        let faq = FaqState::new();
        assert_eq!(faq.expanded(), Some(0));
        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(1));
        assert!(!faq.is_expanded(3));
    }

    #[test]
    fn test_faq_toggle_open_item_closes_it() {
        let mut faq = FaqState::new();
        faq.toggle(0);
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn test_faq_toggle_moves_expansion() {
        let mut faq = FaqState::new();
        faq.toggle(2);
        assert_eq!(faq.expanded(), Some(2));
        assert!(!faq.is_expanded(0)); // previous entry collapsed
        faq.toggle(1);
        assert_eq!(faq.expanded(), Some(1));
        assert!(!faq.is_expanded(2));
    }

    #[test]
    fn test_faq_double_toggle_closes_everything() {
        let mut faq = FaqState::new();
        faq.toggle(2);
        faq.toggle(2);
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn test_faq_double_toggle_is_self_inverse() {
        // From collapsed: open then close lands back on collapsed.
        let mut faq = FaqState::new();
        faq.toggle(0);
        assert_eq!(faq.expanded(), None);
        faq.toggle(3);
        faq.toggle(3);
        assert_eq!(faq.expanded(), None);
        // From expanded-at-i: close then reopen lands back on i.
        faq.toggle(1);
        let before = faq;
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq, before);
    }

    #[test]
    fn test_faq_rapid_clicks_last_one_wins() {
        let mut faq = FaqState::new();
        for index in [1, 3, 0, 3] {
            faq.toggle(index);
        }
        assert_eq!(faq.expanded(), Some(3));
    }
}
