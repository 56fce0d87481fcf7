use regex::Regex;

use super::traits::PlatformHandler;
use super::Platform;

// TikTok numeric IDs have no fixed length.
static PATTERNS: std::sync::LazyLock<Vec<Regex>> =
    std::sync::LazyLock::new(|| vec![Regex::new(r"video/(\d+)").unwrap()]);

static USERNAME: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"@([^/]+)").unwrap());

pub struct TikTokHandler;

impl TikTokHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TikTokHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformHandler for TikTokHandler {
    fn platform(&self) -> Platform {
        Platform::TikTok
    }

    fn url_patterns(&self) -> &[Regex] {
        &PATTERNS
    }
}

/// Extract the `@handle` from a TikTok URL for embed attribution.
///
/// Falls back to `user` when the URL has no handle segment.
#[must_use]
pub fn username(url: &str) -> String {
    USERNAME
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "user".to_string(), |m| m.as_str().to_string())
}
