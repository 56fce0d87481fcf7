//! Video platforms and identifier extraction.
//!
//! Each supported platform has a handler that turns the raw URL stored in the
//! projects table into the identifier its embed player needs. Extraction never
//! fails loudly: anything unrecognized is simply `None`, and the embed renders
//! a fallback.

mod traits;

pub mod instagram;
pub mod tiktok;
pub mod youtube;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use instagram::InstagramHandler;
pub use tiktok::TikTokHandler;
pub use traits::PlatformHandler;
pub use youtube::{is_shorts_url, YouTubeHandler};

static YOUTUBE: YouTubeHandler = YouTubeHandler::new();
static TIKTOK: TikTokHandler = TikTokHandler::new();
static INSTAGRAM: InstagramHandler = InstagramHandler::new();

/// A supported social video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "tiktok")]
    TikTok,
    Instagram,
}

impl Platform {
    /// All platforms in showcase order.
    pub const ALL: [Platform; 3] = [Self::TikTok, Self::YouTube, Self::Instagram];

    /// Value stored in the `platform` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
            Self::Instagram => "instagram",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
        }
    }

    /// Short description shown on the platform card.
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::YouTube => "Long Videos",
            Self::TikTok => "Short Videos",
            Self::Instagram => "Reels",
        }
    }

    /// Extract this platform's video identifier from a raw URL.
    #[must_use]
    pub fn extract_identifier(&self, url: &str) -> Option<String> {
        handler_for(*self).extract_identifier(url)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no supported platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(Self::YouTube),
            "tiktok" => Ok(Self::TikTok),
            "instagram" => Ok(Self::Instagram),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// Get the handler for a platform.
#[must_use]
pub fn handler_for(platform: Platform) -> &'static dyn PlatformHandler {
    match platform {
        Platform::YouTube => &YOUTUBE,
        Platform::TikTok => &TIKTOK,
        Platform::Instagram => &INSTAGRAM,
    }
}

/// Extract a video identifier given the raw platform column value.
///
/// Unknown platforms and unrecognized URLs both yield `None`.
#[must_use]
pub fn extract_identifier(platform: &str, url: &str) -> Option<String> {
    platform
        .parse::<Platform>()
        .ok()
        .and_then(|p| p.extract_identifier(url))
}
