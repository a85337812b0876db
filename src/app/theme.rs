//! Theme management with localStorage persistence.
//!
//! The preference is applied as a `light`/`dark` class on the root element;
//! `System` clears the class and lets the prefers-color-scheme media query
//! in the stylesheet decide. The site ships dark-first.

use dioxus::prelude::*;

/// localStorage key for the persisted preference
const STORAGE_KEY: &str = "portfolio-theme";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Theme {
    System,
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "system" => Theme::System,
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// CSS class to apply to the root element (empty for system)
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::System => "",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Set and persist theme
    pub fn set(&self, theme: Theme) {
        let mut current = self.current;
        current.set(theme);

        // Apply to DOM and save to localStorage
        #[cfg(target_arch = "wasm32")]
        {
            apply_theme_to_dom(theme);
            save_theme_to_storage(theme);
        }
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let current = use_signal(Theme::default);

    let ctx = ThemeContext { current };
    use_context_provider(|| ctx);

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let saved = load_theme_from_storage();
            let mut current = current;
            current.set(saved);
            apply_theme_to_dom(saved);
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn load_theme_from_storage() -> Theme {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return Theme::parse(&value);
            }
        }
    }
    Theme::default()
}

#[cfg(target_arch = "wasm32")]
fn save_theme_to_storage(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.class_list().remove_2("light", "dark");

                let class = theme.css_class();
                if !class.is_empty() {
                    let _ = root.class_list().add_1(class);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_themes() {
        for theme in [Theme::System, Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_preference_falls_back_to_dark() {
        assert_eq!(Theme::parse("oled"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn system_theme_has_no_class() {
        assert!(Theme::System.css_class().is_empty());
        assert_eq!(Theme::Light.css_class(), "light");
        assert_eq!(Theme::Dark.css_class(), "dark");
    }
}
