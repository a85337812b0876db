//! Landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { title: "Full Stack Developer",
            section { class: "hero",
                p { class: "accent", "Hi, my name is" }
                h1 { "Yusuf Ali." }
                h1 { class: "muted", "I build things for the web." }
                p { class: "muted",
                    "Full-stack developer focused on modern, minimal web "
                    "applications - from typed backends to accessible, "
                    "animated interfaces."
                }
            }
        }
    }
}
