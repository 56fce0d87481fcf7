//! Platform video embeds.
//!
//! YouTube is embedded as an iframe built from the extracted identifier.
//! TikTok and Instagram are rendered as the blockquote markup their own
//! embed scripts upgrade in the browser; [`EmbedScripts`] emits those scripts
//! once per page.

use maud::{html, Markup, Render};

use crate::constants::{INSTAGRAM_EMBED_SCRIPT, TIKTOK_EMBED_SCRIPT};
use crate::platforms::{instagram, is_shorts_url, tiktok, youtube, Platform};
use crate::projects::Project;

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Embedded player for a single project.
#[derive(Debug, Clone, Copy)]
pub struct VideoEmbed<'a> {
    platform: Option<Platform>,
    video_url: &'a str,
    year: i32,
}

impl<'a> VideoEmbed<'a> {
    #[must_use]
    pub fn new(platform: Option<Platform>, video_url: &'a str, year: i32) -> Self {
        Self {
            platform,
            video_url,
            year,
        }
    }

    #[must_use]
    pub fn for_project(project: &'a Project) -> Self {
        Self::new(project.platform(), &project.video_url, project.year)
    }

    fn year_badge(&self) -> Markup {
        html! { span class="year-badge" { (self.year) } }
    }

    fn render_youtube(&self, video_id: &str) -> Markup {
        let frame_class = if is_shorts_url(self.video_url) {
            "embed-frame vertical"
        } else {
            "embed-frame horizontal"
        };

        html! {
            div class="embed youtube" {
                div class=(frame_class) {
                    iframe
                        src=(youtube::embed_url(video_id))
                        title="YouTube video"
                        frameborder="0"
                        allow=(YOUTUBE_ALLOW)
                        referrerpolicy="strict-origin-when-cross-origin"
                        allowfullscreen
                        loading="lazy" {}
                }
                (self.year_badge())
            }
        }
    }

    fn render_tiktok(&self, video_id: &str) -> Markup {
        let username = tiktok::username(self.video_url);

        html! {
            div class="embed tiktok" {
                blockquote class="tiktok-embed" cite=(self.video_url) data-video-id=(video_id) {
                    section {
                        a target="_blank" rel="noreferrer" href=(format!("https://www.tiktok.com/@{username}")) {
                            "@" (username)
                        }
                    }
                }
                (self.year_badge())
            }
        }
    }

    fn render_instagram(&self, shortcode: &str) -> Markup {
        let permalink = instagram::permalink(shortcode);

        html! {
            div class="embed instagram" {
                blockquote class="instagram-media" data-instgrm-captioned data-instgrm-permalink=(permalink) data-instgrm-version="14" {
                    a href=(permalink) target="_blank" rel="noreferrer" { "View on Instagram" }
                }
                (self.year_badge())
            }
        }
    }

    fn render_fallback() -> Markup {
        html! {
            div class="embed invalid" {
                p { "Invalid video URL" }
            }
        }
    }
}

impl Render for VideoEmbed<'_> {
    fn render(&self) -> Markup {
        let Some(platform) = self.platform else {
            return Self::render_fallback();
        };
        let Some(id) = platform.extract_identifier(self.video_url) else {
            return Self::render_fallback();
        };

        match platform {
            Platform::YouTube => self.render_youtube(&id),
            Platform::TikTok => self.render_tiktok(&id),
            Platform::Instagram => self.render_instagram(&id),
        }
    }
}

/// Third-party embed scripts needed by a set of projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedScripts {
    tiktok: bool,
    instagram: bool,
}

impl EmbedScripts {
    #[must_use]
    pub fn for_projects(projects: &[Project]) -> Self {
        let mut scripts = Self::default();
        for platform in projects.iter().filter_map(Project::platform) {
            match platform {
                Platform::TikTok => scripts.tiktok = true,
                Platform::Instagram => scripts.instagram = true,
                Platform::YouTube => {}
            }
        }
        scripts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.tiktok && !self.instagram
    }
}

impl Render for EmbedScripts {
    fn render(&self) -> Markup {
        html! {
            @if self.tiktok {
                script async src=(TIKTOK_EMBED_SCRIPT) {}
            }
            @if self.instagram {
                script async src=(INSTAGRAM_EMBED_SCRIPT) {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(platform: &str, url: &str) -> Project {
        Project {
            id: "1".to_string(),
            platform: platform.to_string(),
            video_url: url.to_string(),
            year: 2024,
            order_index: 0,
            created_at: None,
        }
    }

    #[test]
    fn test_youtube_regular_is_horizontal() {
        let p = project("youtube", "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
        assert!(html.contains("embed-frame horizontal"));
        assert!(html.contains(">2024<"));
    }

    #[test]
    fn test_youtube_shorts_is_vertical() {
        let p = project("youtube", "https://youtube.com/shorts/abcDEF12_-3");
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("embed/abcDEF12_-3"));
        assert!(html.contains("embed-frame vertical"));
    }

    #[test]
    fn test_tiktok_blockquote() {
        let p = project(
            "tiktok",
            "https://www.tiktok.com/@kaze/video/7123456789012345678",
        );
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("class=\"tiktok-embed\""));
        assert!(html.contains("data-video-id=\"7123456789012345678\""));
        assert!(html.contains("href=\"https://www.tiktok.com/@kaze\""));
    }

    #[test]
    fn test_instagram_blockquote() {
        let p = project("instagram", "https://www.instagram.com/p/Cabc123XYZ/");
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("class=\"instagram-media\""));
        assert!(html.contains("data-instgrm-permalink=\"https://www.instagram.com/reel/Cabc123XYZ/\""));
    }

    #[test]
    fn test_invalid_url_fallback() {
        let p = project("tiktok", "https://www.tiktok.com/@kaze");
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("Invalid video URL"));

        let p = project("vimeo", "https://vimeo.com/123");
        let html = VideoEmbed::for_project(&p).render().into_string();
        assert!(html.contains("Invalid video URL"));
    }

    #[test]
    fn test_embed_scripts() {
        let youtube_only = [project("youtube", "https://youtu.be/dQw4w9WgXcQ")];
        assert!(EmbedScripts::for_projects(&youtube_only).is_empty());

        let mixed = [
            project("tiktok", "https://www.tiktok.com/@a/video/1"),
            project("tiktok", "https://www.tiktok.com/@a/video/2"),
        ];
        let html = EmbedScripts::for_projects(&mixed).render().into_string();
        assert_eq!(html.matches(TIKTOK_EMBED_SCRIPT).count(), 1);
        assert!(!html.contains(INSTAGRAM_EMBED_SCRIPT));
    }
}
