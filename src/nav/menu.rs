//! Open/closed state of the mobile slide-down menu.
//!
//! The panel only exists below the desktop breakpoint, so crossing into a
//! desktop-width viewport while open forces it shut. Route changes and link
//! selection do the same.

use super::DESKTOP_BREAKPOINT_PX;

/// The two states of the mobile menu. `Closed` on every mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile menu controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Hamburger button activation.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Selection of a navigation link closes the panel.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Any change of the current route closes the panel.
    pub fn route_changed(&mut self) {
        self.close();
    }

    /// Viewport resize. Crossing to a desktop-width viewport while open
    /// closes the panel; returns whether a transition happened so callers
    /// can skip redundant redraws.
    pub fn viewport_resized(&mut self, width_px: f64) -> bool {
        if width_px >= DESKTOP_BREAKPOINT_PX && self.is_open() {
            self.state = MenuState::Closed;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu() -> MobileMenu {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu
    }

    #[test]
    fn starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn toggle_cycles() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn route_change_closes() {
        let mut menu = open_menu();
        menu.route_changed();
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_to_desktop_closes() {
        let mut menu = open_menu();
        assert!(menu.viewport_resized(800.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_within_mobile_keeps_open() {
        let mut menu = open_menu();
        assert!(!menu.viewport_resized(700.0));
        assert!(menu.is_open());
    }

    #[test]
    fn resize_while_closed_is_a_noop() {
        let mut menu = MobileMenu::default();
        assert!(!menu.viewport_resized(1024.0));
        assert!(!menu.is_open());
    }
}
