//! Contact page.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Contact page component.
#[component]
pub fn Contact() -> Element {
    rsx! {
        Layout { title: "Contact",
            h1 { "Get in touch" }
            p {
                "My inbox is always open - whether it's a question, a "
                "project, or just to say hi."
            }
            p {
                a { class: "accent", href: "mailto:hello@yusufali.dev", "hello@yusufali.dev" }
            }
        }
    }
}
