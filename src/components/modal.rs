//! Gallery dialog for one platform.

use maud::{html, Markup, PreEscaped, Render};

use super::alert::Alert;
use super::embed::VideoEmbed;
use super::pagination::Pagination;
use crate::gallery::{GalleryView, Paginator, CLOSE_KEY};
use crate::platforms::Platform;

/// Where the close button and the Escape key send the visitor.
pub const CLOSE_HREF: &str = "/#portfolio";

/// Browser side of [`GalleryDialog::on_key`](crate::gallery::GalleryDialog::on_key).
///
/// Only emitted while a dialog is rendered, so it lives and dies with the
/// dialog.
fn close_key_script() -> String {
    format!(
        r#"document.addEventListener('keydown', function (e) {{
    if (e.key === '{CLOSE_KEY}') {{ window.location.href = '{CLOSE_HREF}'; }}
}});"#
    )
}

/// Gallery URL for a platform.
#[must_use]
pub fn gallery_url(platform: Platform) -> String {
    format!("/gallery/{}", platform.as_str())
}

/// Modal dialog showing one platform's projects.
#[derive(Debug, Clone, Copy)]
pub struct PlatformModal<'a> {
    view: GalleryView<'a>,
}

impl<'a> PlatformModal<'a> {
    #[must_use]
    pub const fn new(view: GalleryView<'a>) -> Self {
        Self { view }
    }

    fn platform(&self) -> Option<Platform> {
        match self.view {
            GalleryView::Closed => None,
            GalleryView::Loading(p) | GalleryView::Failed(p, _) | GalleryView::Empty(p) => Some(p),
            GalleryView::Page { platform, .. } => Some(platform),
        }
    }

    fn render_header(&self, platform: Platform) -> Markup {
        let (count, page_info) = match self.view {
            GalleryView::Page {
                total_items,
                page,
                total_pages,
                ..
            } => (
                Some(total_items),
                (total_pages > 1).then(|| format!(" \u{2022} Page {page}/{total_pages}")),
            ),
            GalleryView::Empty(_) => (Some(0), None),
            _ => (None, None),
        };

        html! {
            header class=(format!("modal-header {}", platform.as_str())) {
                div {
                    h2 id="gallery-title" { (platform.display_name()) " Projects" }
                    @if let Some(count) = count {
                        p class="modal-subtitle" {
                            (count) " video" @if count != 1 { "s" }
                            @if let Some(info) = &page_info { (info) }
                        }
                    }
                }
                a class="modal-close" href=(CLOSE_HREF) aria-label="Close" { "\u{2715}" }
            }
        }
    }

    fn render_body(&self, platform: Platform) -> Markup {
        match self.view {
            GalleryView::Closed => html! {},
            GalleryView::Loading(_) => html! {
                div class="spinner" role="status" aria-label="Loading" {}
            },
            GalleryView::Failed(_, message) => html! { (Alert::error(message)) },
            GalleryView::Empty(_) => {
                let message = format!("No projects yet for {}", platform.display_name());
                html! { (Alert::info(&message)) }
            }
            GalleryView::Page {
                items,
                page,
                total_items,
                ..
            } => html! {
                div class="project-list" {
                    @for project in items {
                        article class="project" data-project-id=(project.id) {
                            (VideoEmbed::for_project(project))
                        }
                    }
                }
                (Pagination::new(page, Paginator::new(total_items), &gallery_url(platform)))
            },
        }
    }
}

impl Render for PlatformModal<'_> {
    fn render(&self) -> Markup {
        let Some(platform) = self.platform() else {
            return html! {};
        };

        html! {
            div class="modal-backdrop" {
                a class="modal-dismiss" href=(CLOSE_HREF) tabindex="-1" aria-hidden="true" {}
                div class="modal" role="dialog" aria-modal="true" aria-labelledby="gallery-title" {
                    (self.render_header(platform))
                    div class="modal-content" {
                        (self.render_body(platform))
                    }
                }
            }
            script { (PreEscaped(close_key_script())) }
        }
    }
}
