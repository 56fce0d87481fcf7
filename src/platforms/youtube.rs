use once_cell::sync::Lazy;
use regex::Regex;

use super::traits::PlatformHandler;
use super::Platform;

// Order matters: a Shorts path wins over any `v=` parameter in the same URL.
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
            .unwrap(),
        Regex::new(r"[?&]v=([a-zA-Z0-9_-]{11})").unwrap(),
    ]
});

pub struct YouTubeHandler;

impl YouTubeHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for YouTubeHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformHandler for YouTubeHandler {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn url_patterns(&self) -> &[Regex] {
        &PATTERNS
    }
}

/// Check if a YouTube URL points at a Shorts video.
///
/// Shorts are embedded with a vertical player. This is independent of
/// identifier extraction.
#[must_use]
pub fn is_shorts_url(url: &str) -> bool {
    url.contains("/shorts/")
}

/// Build the iframe source for a YouTube video identifier.
#[must_use]
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
