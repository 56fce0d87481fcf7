use regex::Regex;

use super::traits::PlatformHandler;
use super::Platform;

static PATTERNS: std::sync::LazyLock<Vec<Regex>> = std::sync::LazyLock::new(|| {
    vec![
        // Reels and post permalinks share one slug alphabet
        Regex::new(r"(?:reel|p)/([a-zA-Z0-9_-]+)").unwrap(),
    ]
});

pub struct InstagramHandler;

impl InstagramHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for InstagramHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformHandler for InstagramHandler {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn url_patterns(&self) -> &[Regex] {
        &PATTERNS
    }
}

/// Canonical reel permalink used by the Instagram embed script.
#[must_use]
pub fn permalink(shortcode: &str) -> String {
    format!("https://www.instagram.com/reel/{shortcode}/")
}
