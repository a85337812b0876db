//! Embedded static assets for single-binary distribution.
//!
//! The stylesheet is compiled into the binary with include_str! and the
//! favicon is served as a base64 data URL, so the server has no external
//! file dependencies.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::LazyLock;

/// Site stylesheet (theme variables, nav, pages)
pub const SITE_CSS: &str = include_str!("../../public/style.css");

/// Favicon bytes
const FAVICON_BYTES: &[u8] = include_bytes!("../../public/favicon.svg");

/// Favicon as data URL (lazily encoded)
pub static FAVICON_DATA_URL: LazyLock<String> = LazyLock::new(|| {
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(FAVICON_BYTES)
    )
});
