//! Theme switcher buttons bound to the theme context.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, Theme};

/// Theme switcher with system, light, and dark options.
#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = use_theme();
    let current = theme.get();

    rsx! {
        div { class: "theme-switcher",
            for option in [Theme::System, Theme::Light, Theme::Dark] {
                button {
                    class: if current == option { "active" },
                    onclick: move |_| theme.set(option),
                    {option.label()}
                }
            }
        }
    }
}
