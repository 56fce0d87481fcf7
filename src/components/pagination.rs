//! Pagination component for the gallery dialog.
//!
//! Renders previous / numbered / next links. Page numbers are 1-indexed in
//! both the URL and the label.

use maud::{html, Markup, Render};

use crate::gallery::Paginator;

/// Page navigation controls.
///
/// Automatically hides if there's only 1 page.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub current_page: usize,
    /// Page math for the list being navigated
    pub paginator: Paginator,
    /// Base URL for page links (`?page=N` is appended)
    pub base_url: String,
}

impl Pagination {
    /// Create a new pagination component.
    #[must_use]
    pub fn new(current_page: usize, paginator: Paginator, base_url: &str) -> Self {
        Self {
            current_page,
            paginator,
            base_url: base_url.to_string(),
        }
    }

    /// Build URL for a specific page number.
    fn build_url(&self, page_num: usize) -> String {
        if page_num <= 1 {
            self.base_url.clone()
        } else {
            format!("{}?page={page_num}", self.base_url)
        }
    }

    /// Check if pagination should be displayed.
    #[must_use]
    pub fn should_display(&self) -> bool {
        self.paginator.total_pages() > 1
    }
}

impl Render for Pagination {
    fn render(&self) -> Markup {
        if !self.should_display() {
            return html! {};
        }

        let current = self.current_page;
        let paginator = self.paginator;

        html! {
            nav class="pagination" aria-label="Gallery pages" {
                @if paginator.has_previous(current) {
                    a href=(self.build_url(current - 1)) rel="prev" { "\u{2039} Previous" }
                } @else {
                    span class="disabled" { "\u{2039} Previous" }
                }

                @for page_num in 1..=paginator.total_pages() {
                    @if page_num == current {
                        span class="current" aria-current="page" { (page_num) }
                    } @else {
                        a href=(self.build_url(page_num)) { (page_num) }
                    }
                }

                @if paginator.has_next(current) {
                    a href=(self.build_url(current + 1)) rel="next" { "Next \u{203a}" }
                } @else {
                    span class="disabled" { "Next \u{203a}" }
                }
            }
        }
    }
}
