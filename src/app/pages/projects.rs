//! Projects page.

use dioxus::prelude::*;

use crate::app::components::Layout;

struct Project {
    name: &'static str,
    blurb: &'static str,
    stack: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio Site",
        blurb: "This site: server-rendered pages with a scroll-aware floating nav.",
        stack: "Rust · Dioxus",
    },
    Project {
        name: "Hi-Fi Dashboard",
        blurb: "Realtime control surface for multi-room audio zones.",
        stack: "Rust · SSE · MQTT",
    },
    Project {
        name: "Chronicle",
        blurb: "Personal metrics dashboard with weekly insight digests.",
        stack: "TypeScript · Postgres",
    },
];

/// Projects page component.
#[component]
pub fn Projects() -> Element {
    rsx! {
        Layout { title: "Projects",
            h1 { "Projects" }
            div { class: "project-grid",
                for project in PROJECTS {
                    div { key: "{project.name}", class: "project-card",
                        h3 { {project.name} }
                        p { {project.blurb} }
                        small { class: "muted", {project.stack} }
                    }
                }
            }
        }
    }
}
