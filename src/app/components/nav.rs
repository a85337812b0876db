//! Floating navigation bar.
//!
//! Hides on scroll-down, reveals on scroll-up or near the top of the page,
//! and collapses into a hamburger menu below the desktop breakpoint. The
//! show/hide and menu decisions live in [`crate::nav`]; this component wires
//! them to window events and renders the two link lists.

use dioxus::prelude::*;

use crate::app::Route;
use crate::nav::{
    index_label, is_current_page, stagger_delay_secs, MobileMenu, ScrollVisibility,
    HIDDEN_OFFSET_PX, NAV_TRANSITION_MS,
};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// One entry in the nav bar's link list. Order is display order.
#[derive(Clone, PartialEq)]
pub struct NavItem {
    /// Display label (non-empty)
    pub name: String,
    /// Destination path
    pub link: String,
    /// Optional renderable glyph shown next to the label
    pub icon: Option<Element>,
}

impl NavItem {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Show/hide animation style, as a pure function of state.
fn motion_style(visible: bool) -> String {
    let (opacity, y) = if visible {
        (1.0, 0.0)
    } else {
        (0.0, HIDDEN_OFFSET_PX)
    };
    format!(
        "opacity:{opacity};transform:translateY({y}px);transition:opacity {ms}ms ease,transform {ms}ms ease;",
        ms = NAV_TRANSITION_MS
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct FloatingNavProps {
    /// Ordered nav entries supplied by the caller
    pub items: Vec<NavItem>,
    /// Optional extra class on the nav element
    #[props(default)]
    pub class: Option<String>,
}

/// Floating navigation bar component.
#[component]
pub fn FloatingNav(props: FloatingNavProps) -> Element {
    let visibility = use_signal(ScrollVisibility::new);
    let mut menu = use_signal(MobileMenu::default);

    let path = use_route::<Route>().to_string();

    // Close the mobile menu whenever the route changes
    use_effect(use_reactive!(|path| {
        let _ = &path;
        menu.write().route_changed();
    }));

    #[cfg(target_arch = "wasm32")]
    use_window_listeners(visibility, menu);

    let visible = visibility.read().visible();
    let elevated = visibility.read().scrolled();
    let open = menu.read().is_open();

    let mut nav_class = String::from("floating-nav");
    if elevated {
        nav_class.push_str(" elevated");
    }
    if let Some(extra) = &props.class {
        nav_class.push(' ');
        nav_class.push_str(extra);
    }

    rsx! {
        nav {
            class: "{nav_class}",
            style: motion_style(visible),
            aria_label: "Main navigation",

            // Mobile header row: brand + hamburger
            div { class: "nav-mobile-bar",
                a { class: "nav-brand", href: "/", aria_label: "Home", "Ali._" }
                button {
                    class: if open { "nav-burger open" } else { "nav-burger" },
                    aria_expanded: "{open}",
                    aria_controls: "mobile-menu",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu.write().toggle(),
                    div { class: "nav-burger-box",
                        span { class: "nav-burger-line" }
                        span { class: "nav-burger-line" }
                        span { class: "nav-burger-line" }
                    }
                }
            }

            // Mobile slide-down panel, items entering staggered
            if open {
                div {
                    id: "mobile-menu",
                    class: "nav-mobile-menu",
                    role: "menu",
                    "aria-orientation": "vertical",
                    for (idx, item) in props.items.iter().enumerate() {
                        div {
                            key: "{item.link}",
                            class: "nav-mobile-item",
                            style: format!("animation-delay:{}s", stagger_delay_secs(idx)),
                            role: "none",
                            a {
                                href: "{item.link}",
                                role: "menuitem",
                                aria_current: if is_current_page(&item.link, &path) { "page" },
                                onclick: move |_| menu.write().close(),
                                span { class: "nav-index", {index_label(idx)} }
                                {item.name.clone()}
                            }
                        }
                    }
                }
            }

            // Desktop horizontal list
            div { class: "nav-desktop", role: "navigation",
                for (idx, item) in props.items.iter().enumerate() {
                    div { key: "{item.link}", class: "nav-item",
                        span { class: "nav-index", aria_hidden: "true", {index_label(idx)} }
                        a {
                            href: "{item.link}",
                            aria_current: if is_current_page(&item.link, &path) { "page" },
                            if let Some(icon) = &item.icon {
                                span { class: "nav-icon", aria_hidden: "true", {icon.clone()} }
                            }
                            span { {item.name.clone()} }
                            span { class: "nav-underline", aria_hidden: "true" }
                        }
                        if idx + 1 < props.items.len() {
                            span { class: "nav-separator", aria_hidden: "true", "//" }
                        }
                    }
                }
            }
        }
    }
}

// ============ WASM-only window plumbing ============

/// RAII guard owning the window listener closures; dropping it removes
/// both listeners, so a mount can never leak subscriptions.
#[cfg(target_arch = "wasm32")]
struct WindowListenerGuard {
    window: web_sys::Window,
    onscroll: Closure<dyn FnMut(web_sys::Event)>,
    onresize: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.onscroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.onresize.as_ref().unchecked_ref());
    }
}

/// Subscribe to window scroll/resize for the component's mounted lifetime.
#[cfg(target_arch = "wasm32")]
fn use_window_listeners(visibility: Signal<ScrollVisibility>, menu: Signal<MobileMenu>) {
    // The guard persists across renders and drops with the component
    let guard: Rc<RefCell<Option<WindowListenerGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        if guard.borrow().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        // Evaluate the initial scroll position before any scroll event fires
        sample_scroll(&window, visibility);

        let scroll_window = window.clone();
        let onscroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            sample_scroll(&scroll_window, visibility);
        }) as Box<dyn FnMut(_)>);

        let resize_window = window.clone();
        let onresize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let width = resize_window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let mut state = *menu.peek();
            if state.viewport_resized(width) {
                let mut menu = menu;
                menu.set(state);
            }
        }) as Box<dyn FnMut(_)>);

        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            onscroll.as_ref().unchecked_ref(),
            &opts,
        );
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            onresize.as_ref().unchecked_ref(),
            &opts,
        );

        *guard.borrow_mut() = Some(WindowListenerGuard {
            window,
            onscroll,
            onresize,
        });
    });
}

/// Feed the visibility controller from live window metrics, writing the
/// signal only when the derived state actually changed.
#[cfg(target_arch = "wasm32")]
fn sample_scroll(window: &web_sys::Window, visibility: Signal<ScrollVisibility>) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    // Normalize against the scrollable track; unscrollable pages stay at 0
    let track = (document_height - viewport).max(1.0);
    let progress = (offset / track).clamp(0.0, 1.0);

    let mut state = *visibility.peek();
    let before = state;
    state.sample_progress(progress);
    state.sample_offset(offset);
    if state != before {
        let mut visibility = visibility;
        visibility.set(state);
    }
}
