//! Layout component wrapping all pages with document metadata and chrome.
//!
//! This is the page shell: head metadata (title template, social preview
//! tags, robots directives, icons), the embedded stylesheet, the floating
//! nav, and the footer. Pure configuration around the page content.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::embedded_assets::{FAVICON_DATA_URL, SITE_CSS};

use super::nav::{FloatingNav, NavItem};
use super::theme::ThemeSwitcher;

const SITE_NAME: &str = "Ali Portfolio";
const SITE_URL: &str = "https://yusufali.dev";
const SITE_DESCRIPTION: &str = "Modern & minimal portfolio showcasing my work in full-stack \
                                development, web applications, and software engineering.";
const SITE_KEYWORDS: &str =
    "Portfolio, Full Stack Developer, Web Development, Software Engineer, Rust, Dioxus";
const SITE_AUTHOR: &str = "Ali";
const SITE_CREATOR: &str = "Yusuf Ali";
const TWITTER_HANDLE: &str = "@yusufali";
const THEME_COLOR: &str = "#0B1120";

/// Nav entries in display order. The icon slot takes any renderable glyph.
fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/").with_icon(home_icon()),
        NavItem::new("About", "/about"),
        NavItem::new("Projects", "/projects"),
        NavItem::new("Contact", "/contact").with_icon(mail_icon()),
    ]
}

fn home_icon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M3 11l9-8 9 8" }
            path { d: "M5 9v12h14V9" }
        }
    }
}

fn mail_icon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            rect { x: "2", y: "5", width: "20", height: "14", rx: "2" }
            path { d: "M2 7l10 6 10-6" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (combined with the site title template)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} | {}", props.title, SITE_NAME);
    let version = env!("CARGO_PKG_VERSION");
    let git_sha = env!("PORTFOLIO_GIT_SHA");
    let year = chrono::Utc::now().year();
    let favicon = FAVICON_DATA_URL.as_str();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, maximum-scale=5",
        }
        document::Meta { name: "description", content: "{SITE_DESCRIPTION}" }
        document::Meta { name: "keywords", content: "{SITE_KEYWORDS}" }
        document::Meta { name: "author", content: "{SITE_AUTHOR}" }
        document::Meta { name: "creator", content: "{SITE_CREATOR}" }
        document::Meta { name: "robots", content: "index, follow" }
        document::Meta {
            name: "googlebot",
            content: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
        }
        document::Meta { name: "theme-color", content: "{THEME_COLOR}" }

        // Open Graph
        document::Meta { property: "og:type", content: "website" }
        document::Meta { property: "og:locale", content: "en_US" }
        document::Meta { property: "og:url", content: "{SITE_URL}" }
        document::Meta { property: "og:site_name", content: "{SITE_NAME}" }
        document::Meta { property: "og:title", content: "{full_title}" }
        document::Meta { property: "og:description", content: "{SITE_DESCRIPTION}" }

        // Twitter
        document::Meta { name: "twitter:card", content: "summary_large_image" }
        document::Meta { name: "twitter:title", content: "{full_title}" }
        document::Meta { name: "twitter:description", content: "{SITE_DESCRIPTION}" }
        document::Meta { name: "twitter:creator", content: "{TWITTER_HANDLE}" }

        document::Link { rel: "icon", r#type: "image/svg+xml", href: "{favicon}" }
        document::Style { {SITE_CSS} }

        // Body content
        FloatingNav { items: nav_items() }
        main { {props.children} }
        footer { class: "site-footer",
            small { "© {year} {SITE_CREATOR} · v{version} ({git_sha})" }
            ThemeSwitcher {}
        }
    }
}
