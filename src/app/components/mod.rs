//! Shared UI components for the portfolio.

pub mod layout;
pub mod nav;
pub mod theme;

pub use layout::Layout;
pub use nav::{FloatingNav, NavItem};
pub use theme::ThemeSwitcher;
