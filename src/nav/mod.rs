//! Navigation bar behavior, kept free of framework types.
//!
//! The floating nav component in `app::components::nav` is a thin projection
//! of the state machines in this module:
//! - [`visibility::ScrollVisibility`] - show/hide decisions from scroll samples
//! - [`menu::MobileMenu`] - open/closed state of the mobile slide-down panel
//!
//! Animation timing lives here as plain constants so the rendering layer is a
//! pure function from state to style.

pub mod menu;
pub mod visibility;

pub use menu::{MenuState, MobileMenu};
pub use visibility::ScrollVisibility;

/// Scroll-progress threshold below which the nav is always shown.
pub const TOP_REVEAL_THRESHOLD: f64 = 0.05;

/// Viewport width (px) at which the layout switches to desktop.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Duration of the show/hide opacity + translate transition.
pub const NAV_TRANSITION_MS: u64 = 200;

/// Vertical offset (px) the bar slides to while hidden.
pub const HIDDEN_OFFSET_PX: f64 = -100.0;

/// Entrance delay added per mobile menu item.
pub const MENU_STAGGER_STEP_SECS: f64 = 0.1;

/// Two-digit, zero-padded, 1-based label for a nav item index.
pub fn index_label(idx: usize) -> String {
    format!("{:02}", idx + 1)
}

/// Entrance animation delay for the mobile menu item at `idx`.
pub fn stagger_delay_secs(idx: usize) -> f64 {
    idx as f64 * MENU_STAGGER_STEP_SECS
}

/// Whether a nav item's destination matches the current route path.
///
/// Exact match only; `/about` does not mark `/about/talks` as current.
pub fn is_current_page(item_link: &str, route_path: &str) -> bool {
    item_link == route_path
}
