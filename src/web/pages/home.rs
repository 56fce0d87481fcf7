//! Home page: about section, platform showcase, and (optionally) an open
//! gallery dialog.

use maud::{html, Markup, Render};

use crate::components::{gallery_url, BaseLayout, Decoration, EmbedScripts, PlatformModal};
use crate::config::{Config, Profile};
use crate::gallery::{GalleryView, Viewport};
use crate::platforms::Platform;

/// Render the full home page.
///
/// `gallery` is the current dialog view; `viewport` decides whether the body
/// is scroll-locked.
#[must_use]
pub fn render_home(
    config: &Config,
    decoration: &dyn Decoration,
    gallery: GalleryView<'_>,
    viewport: &Viewport,
) -> Markup {
    let profile = &config.profile;
    let title = match gallery {
        GalleryView::Closed => "Portfolio".to_string(),
        GalleryView::Loading(p)
        | GalleryView::Failed(p, _)
        | GalleryView::Empty(p)
        | GalleryView::Page { platform: p, .. } => format!("{} Projects", p.display_name()),
    };

    let scripts = match gallery {
        GalleryView::Page { items, .. } => EmbedScripts::for_projects(items),
        _ => EmbedScripts::default(),
    };

    let content = html! {
        (render_about(profile))
        (render_showcase())
        (PlatformModal::new(gallery))
    };

    BaseLayout::new(&title, &profile.owner_name)
        .scroll_locked(viewport.is_scroll_locked())
        .with_decoration(decoration)
        .with_scripts(scripts.render())
        .render(content)
}

/// Render a not-found page for an unknown gallery.
#[must_use]
pub fn render_not_found(config: &Config, what: &str) -> Markup {
    let content = html! {
        section class="not-found" {
            h1 { "Not found" }
            p { "There is no gallery called \u{201c}" (what) "\u{201d}." }
            a href="/#portfolio" { "Back to the portfolio" }
        }
    };
    BaseLayout::new("Not found", &config.profile.owner_name).render(content)
}

fn render_about(profile: &Profile) -> Markup {
    let contacts = profile.contact_links();

    html! {
        section id="about-me" class="about" {
            div class="about-text" {
                h1 class="welcome" { (profile.tagline) }
                h2 class="gradient-text" { (profile.owner_name) }
                @for paragraph in profile.bio.split('|').map(str::trim).filter(|p| !p.is_empty()) {
                    p { (paragraph) }
                }
                @if !contacts.is_empty() {
                    ul class="contacts" {
                        @for (label, href) in &contacts {
                            li {
                                a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
                            }
                        }
                    }
                }
            }
            @if let Some(photo) = &profile.photo_url {
                figure class="profile-card" {
                    img src=(photo) alt=(profile.owner_name) width="300" height="300";
                    figcaption { (profile.owner_name) }
                }
            }
        }
    }
}

fn render_showcase() -> Markup {
    html! {
        section id="portfolio" class="portfolio" {
            h2 { "MY PORTFOLIO" }
            p class="muted" { "Choose a platform to explore my work" }
            div class="platform-cards" {
                @for platform in Platform::ALL {
                    a class=(format!("platform-card {}", platform.as_str())) href=(gallery_url(platform)) {
                        h3 { (platform.display_name()) }
                        p { (platform.subtitle()) }
                    }
                }
            }
        }
    }
}
