//! Base layout components for the site.
//!
//! This module provides the HTML skeleton, the decorative background layer,
//! and the footer.

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::decor::{Decoration, NoDecoration};

/// Critical style that stops the body scrolling behind an open dialog.
/// Must be inline so the lock applies before the stylesheet loads.
const SCROLL_LOCK_STYLE: &str = "body.scroll-locked { overflow: hidden; }";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("Portfolio", "Jane Doe")
///     .scroll_locked(true)
///     .render(content);
/// ```
pub struct BaseLayout<'a> {
    title: &'a str,
    owner_name: &'a str,
    scroll_locked: bool,
    decoration: &'a dyn Decoration,
    scripts: Option<Markup>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and site owner.
    #[must_use]
    pub fn new(title: &'a str, owner_name: &'a str) -> Self {
        Self {
            title,
            owner_name,
            scroll_locked: false,
            decoration: &NoDecoration,
            scripts: None,
        }
    }

    /// Mark the body as scroll-locked (a dialog is open).
    #[must_use]
    pub fn scroll_locked(mut self, locked: bool) -> Self {
        self.scroll_locked = locked;
        self
    }

    /// Set the decorative background layer.
    #[must_use]
    pub fn with_decoration(mut self, decoration: &'a dyn Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Extra markup for the end of the body (e.g. embed scripts).
    #[must_use]
    pub fn with_scripts(mut self, scripts: Markup) -> Self {
        self.scripts = Some(scripts);
        self
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        let body_class = if self.scroll_locked { "scroll-locked" } else { "" };

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="dark";
                    meta name="description" content=(format!("{} - video editing portfolio", self.owner_name));
                    title { (self.title) " - " (self.owner_name) }
                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🎬</text></svg>";
                    style { (PreEscaped(SCROLL_LOCK_STYLE)) }
                }
                body class=(body_class) {
                    div class="backdrop" {}
                    (self.decoration.render_layer())
                    main class="container" {
                        (content)
                    }
                    (self.render_footer())
                    @if let Some(scripts) = self.scripts {
                        (scripts)
                    }
                }
            }
        }
    }

    fn render_footer(&self) -> Markup {
        html! {
            footer class="container" {
                small { "\u{00a9} " (Utc::now().year()) " " (self.owner_name) }
            }
        }
    }
}
