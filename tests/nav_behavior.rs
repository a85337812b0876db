//! Floating nav behavior tests
//!
//! Scenario-level coverage of the visibility controller and the mobile menu
//! state machine, driven the way the browser drives them: a stream of
//! scroll-progress samples, raw offsets, resizes, and route changes.

use portfolio_site::nav::{is_current_page, MobileMenu, ScrollVisibility};

fn feed(samples: &[f64]) -> ScrollVisibility {
    let mut state = ScrollVisibility::new();
    for &s in samples {
        state.sample_progress(s);
    }
    state
}

// =============================================================================
// Visibility controller
// =============================================================================

/// Below the top threshold the bar is shown regardless of direction.
#[test]
fn visible_near_top_even_while_scrolling_down() {
    assert!(feed(&[0.10, 0.03]).visible());
}

/// Past the threshold, visibility follows scroll direction.
#[test]
fn direction_rule_past_threshold() {
    assert!(!feed(&[0.10, 0.20]).visible(), "scrolling down hides");
    assert!(feed(&[0.20, 0.10]).visible(), "scrolling up reveals");
}

/// An anchor jump is just a large sample difference; no smoothing applies.
#[test]
fn anchor_jump_downward_hides() {
    assert!(!feed(&[0.0, 0.9]).visible());
}

/// A realistic reading session: down, down, up a little, back to top.
#[test]
fn scroll_session_tracks_expected_visibility() {
    let mut state = ScrollVisibility::new();
    assert!(state.visible(), "visible before any scrolling");

    assert!(state.sample_progress(0.02), "still inside top threshold");
    assert!(!state.sample_progress(0.30), "reading downward");
    assert!(!state.sample_progress(0.55), "still downward");
    assert!(state.sample_progress(0.50), "nudge upward reveals");
    assert!(!state.sample_progress(0.52), "downward again");
    assert!(state.sample_progress(0.01), "back at the top");
}

/// The elevation flag flips at most once per actual sign change.
#[test]
fn scrolled_flag_is_idempotent_per_sign() {
    let mut state = ScrollVisibility::new();

    assert_eq!(state.sample_offset(4.0), Some(true));
    assert_eq!(state.sample_offset(250.0), None);
    assert_eq!(state.sample_offset(1.0), None);

    assert_eq!(state.sample_offset(0.0), Some(false));
    assert_eq!(state.sample_offset(0.0), None);

    assert_eq!(state.sample_offset(9.0), Some(true));
}

// =============================================================================
// Mobile menu
// =============================================================================

/// Route changes force the menu closed.
#[test]
fn route_change_closes_open_menu() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert!(menu.is_open());

    menu.route_changed();
    assert!(!menu.is_open());

    // Closing an already-closed menu stays closed
    menu.route_changed();
    assert!(!menu.is_open());
}

/// Crossing the desktop breakpoint while open closes the panel; staying
/// below it does not.
#[test]
fn breakpoint_cross_closes_open_menu() {
    let mut menu = MobileMenu::default();
    menu.toggle();

    assert!(!menu.viewport_resized(700.0));
    assert!(menu.is_open(), "resize within mobile keeps the panel");

    assert!(menu.viewport_resized(800.0));
    assert!(!menu.is_open(), "crossing to desktop closes the panel");
}

/// Selecting a link closes the panel, and the hamburger re-opens it.
#[test]
fn link_selection_then_reopen() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());

    menu.toggle();
    assert!(menu.is_open());
}

// =============================================================================
// Current-page marking
// =============================================================================

/// Only the item whose link equals the current route is marked current.
#[test]
fn exactly_one_item_marked_current() {
    let links = ["/", "/about"];
    let marked: Vec<bool> = links.iter().map(|l| is_current_page(l, "/about")).collect();
    assert_eq!(marked, vec![false, true]);
}

#[test]
fn no_item_marked_on_unknown_route() {
    let links = ["/", "/about", "/projects"];
    assert!(links.iter().all(|l| !is_current_page(l, "/blog")));
}
