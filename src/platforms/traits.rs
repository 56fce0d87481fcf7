use regex::Regex;

use super::Platform;

/// Trait for per-platform video URL handlers.
pub trait PlatformHandler: Send + Sync {
    /// The platform this handler understands.
    fn platform(&self) -> Platform;

    /// Identifier patterns, tried in order. The first capture group of the
    /// first matching pattern is the identifier.
    fn url_patterns(&self) -> &[Regex];

    /// Extract the platform-specific video identifier from a raw URL.
    ///
    /// Returns `None` when no pattern matches. Never fails.
    fn extract_identifier(&self, url: &str) -> Option<String> {
        self.url_patterns().iter().find_map(|pattern| {
            pattern
                .captures(url)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }
}
