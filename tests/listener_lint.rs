//! Listener hygiene lint tests
//!
//! The floating nav subscribes to window scroll/resize for the lifetime of a
//! mount and must release both on unmount. These source-scanning lints catch
//! the easy ways to regress that contract.
//!
//! Test strategy:
//! 1. Source-scanning lint tests (catch obvious regressions)
//! 2. Behavior tests for the state machines live in nav_behavior.rs

use std::fs;

const NAV_COMPONENT: &str = "src/app/components/nav.rs";

fn nav_src() -> String {
    fs::read_to_string(NAV_COMPONENT).expect("Failed to read nav component source")
}

/// Every window listener the nav adds must also be removed.
#[test]
fn lint_nav_removes_every_window_listener() {
    let src = nav_src();

    for event in ["\"scroll\"", "\"resize\""] {
        assert!(
            src.contains(event),
            "nav component should subscribe to the {event} window event"
        );
    }

    let adds = src.matches("add_event_listener_with_callback").count();
    let removes = src.matches("remove_event_listener_with_callback").count();
    assert_eq!(
        adds, removes,
        "REGRESSION: {adds} listener registration(s) but {removes} removal(s).\n\
         Every add_event_listener in the nav must have a matching remove in the guard's Drop."
    );
}

/// Scroll/resize handlers must be registered passive - they never call
/// preventDefault and must not block the compositor.
#[test]
fn lint_window_listeners_are_passive() {
    let src = nav_src();
    assert!(
        src.contains("AddEventListenerOptions") && src.contains("set_passive(true)"),
        "window listeners should be registered with passive: true"
    );
}

/// The initial scroll position must be evaluated before the listeners are
/// attached, so pre-interaction state is correct.
#[test]
fn lint_initial_sample_precedes_registration() {
    let src = nav_src();
    let first_sample = src
        .find("sample_scroll(&window")
        .expect("nav component should sample the scroll position");
    let first_add = src
        .find("add_event_listener")
        .expect("nav component should register window listeners");
    assert!(
        first_sample < first_add,
        "the scroll state must be sampled once before listeners attach"
    );
}

/// Closure::forget leaks the callback (and keeps the listener alive after
/// unmount); closures must be owned by the drop guard instead.
#[test]
fn lint_no_forgotten_closures() {
    for entry in walkdir::WalkDir::new("src") {
        let entry = entry.expect("Failed to walk src/");
        if entry.path().extension().map_or(true, |e| e != "rs") {
            continue;
        }
        let src = fs::read_to_string(entry.path())
            .unwrap_or_else(|_| panic!("Failed to read {}", entry.path().display()));
        assert!(
            !src.contains(".forget()"),
            "{} calls Closure::forget - store the closure in the listener guard instead",
            entry.path().display()
        );
    }
}
