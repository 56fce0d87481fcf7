//! Shared constants used across the application.

/// User agent sent with requests to the projects API.
pub const USER_AGENT: &str = concat!("editor-portfolio/", env!("CARGO_PKG_VERSION"));

/// Number of projects shown per gallery page.
pub const PAGE_SIZE: usize = 5;

/// Third-party script that upgrades `blockquote.tiktok-embed` elements.
pub const TIKTOK_EMBED_SCRIPT: &str = "https://www.tiktok.com/embed.js";

/// Third-party script that upgrades `blockquote.instagram-media` elements.
pub const INSTAGRAM_EMBED_SCRIPT: &str = "https://www.instagram.com/embed.js";
