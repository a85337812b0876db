//! About page.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// About page component.
#[component]
pub fn About() -> Element {
    rsx! {
        Layout { title: "About",
            h1 { "About" }
            p {
                "I'm a software engineer who enjoys the whole stack: data "
                "models and APIs on one end, motion and typography on the "
                "other."
            }
            p { class: "muted",
                "Day to day I work with Rust, TypeScript, and whatever the "
                "problem calls for. This site is rendered on the server and "
                "hydrated in the browser from a single binary."
            }
        }
    }
}
