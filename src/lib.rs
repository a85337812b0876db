//! Personal portfolio website.
//!
//! A Dioxus fullstack app: server-rendered, client-hydrated pages with a
//! dark/light theme context and a floating navigation bar that hides on
//! scroll-down, reveals on scroll-up, and collapses into a hamburger menu
//! below the desktop breakpoint.
//!
//! This library provides:
//! - `app` - the Dioxus application (router, theme context, components, pages)
//! - `nav` - framework-free navigation state machines (host-testable)
//! - `config` - server configuration (bind address, port)

pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod nav;
