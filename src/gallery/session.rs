//! Per-visitor gallery state: which platform is selected, which page is
//! showing, and what the last fetch produced.
//!
//! Every fetch is issued against a [`FetchTicket`]. A response is only
//! committed if its ticket still matches the current selection, so a slow
//! response for a platform the visitor already left is dropped instead of
//! overwriting newer state.

use tracing::debug;

use super::pagination::Paginator;
use crate::platforms::Platform;
use crate::projects::{Project, ProjectSource};

/// Outcome of the last fetch for the selected platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded(Vec<Project>),
    Empty,
    Failed(String),
}

/// Receipt for a fetch issued by [`GallerySession::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    platform: Platform,
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }
}

/// What the gallery dialog should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryView<'a> {
    Closed,
    Loading(Platform),
    Failed(Platform, &'a str),
    Empty(Platform),
    Page {
        platform: Platform,
        items: &'a [Project],
        page: usize,
        total_pages: usize,
        total_items: usize,
    },
}

#[derive(Debug, Clone)]
pub struct GallerySession {
    selected: Option<Platform>,
    current_page: usize,
    generation: u64,
    state: FetchState,
}

impl Default for GallerySession {
    fn default() -> Self {
        Self::new()
    }
}

impl GallerySession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            current_page: 1,
            generation: 0,
            state: FetchState::Idle,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Platform> {
        self.selected
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Select a platform and start a fetch for it.
    ///
    /// The page resets to 1 and any rows from the previous selection are
    /// discarded so they can never be shown under the new platform.
    pub fn select(&mut self, platform: Platform) -> FetchTicket {
        self.generation += 1;
        self.selected = Some(platform);
        self.current_page = 1;
        self.state = FetchState::Loading;

        FetchTicket {
            platform,
            generation: self.generation,
        }
    }

    /// Commit the result of a fetch.
    ///
    /// Returns `false` and leaves the session untouched when the ticket is
    /// stale (the visitor selected something else, or closed the gallery,
    /// after the fetch was issued).
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Project>, String>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                platform = %ticket.platform,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale projects response"
            );
            return false;
        }

        self.state = match result {
            Ok(rows) if rows.is_empty() => FetchState::Empty,
            Ok(rows) => FetchState::Loaded(rows),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    /// Check whether a ticket still belongs to the current selection.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.generation == ticket.generation && self.selected == Some(ticket.platform)
    }

    /// Select `platform`, fetch its rows from `source`, and commit them.
    ///
    /// Returns whether the response was committed.
    pub async fn load(&mut self, source: &dyn ProjectSource, platform: Platform) -> bool {
        let ticket = self.select(platform);
        let result = source
            .fetch_by_platform(platform)
            .await
            .map_err(|e| e.user_message());
        self.complete(ticket, result)
    }

    fn paginator(&self) -> Paginator {
        match &self.state {
            FetchState::Loaded(rows) => Paginator::new(rows.len()),
            _ => Paginator::new(0),
        }
    }

    /// Move to a page, clamped into range. Returns the resulting page.
    pub fn go_to_page(&mut self, requested: i64) -> usize {
        self.current_page = self.paginator().clamp_page(requested);
        self.current_page
    }

    /// Close the gallery. Any fetch still in flight becomes stale.
    pub fn close(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.current_page = 1;
        self.state = FetchState::Idle;
    }

    /// Current display state.
    #[must_use]
    pub fn view(&self) -> GalleryView<'_> {
        let Some(platform) = self.selected else {
            return GalleryView::Closed;
        };

        match &self.state {
            FetchState::Idle | FetchState::Loading => GalleryView::Loading(platform),
            FetchState::Failed(message) => GalleryView::Failed(platform, message),
            FetchState::Empty => GalleryView::Empty(platform),
            FetchState::Loaded(rows) => {
                let paginator = Paginator::new(rows.len());
                GalleryView::Page {
                    platform,
                    items: paginator.page_slice(rows, self.current_page),
                    page: self.current_page,
                    total_pages: paginator.total_pages(),
                    total_items: rows.len(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project {
                id: i.to_string(),
                platform: "youtube".to_string(),
                video_url: format!("https://youtu.be/video{i:06}"),
                year: 2024,
                order_index: i as i32,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = GallerySession::new();
        assert_eq!(session.view(), GalleryView::Closed);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_select_enters_loading() {
        let mut session = GallerySession::new();
        let ticket = session.select(Platform::TikTok);
        assert_eq!(ticket.platform(), Platform::TikTok);
        assert_eq!(session.view(), GalleryView::Loading(Platform::TikTok));
    }

    #[test]
    fn test_complete_outcomes() {
        let mut session = GallerySession::new();

        let ticket = session.select(Platform::YouTube);
        assert!(session.complete(ticket, Ok(Vec::new())));
        assert_eq!(session.view(), GalleryView::Empty(Platform::YouTube));

        let ticket = session.select(Platform::YouTube);
        assert!(session.complete(ticket, Err("boom".to_string())));
        assert_eq!(session.view(), GalleryView::Failed(Platform::YouTube, "boom"));

        let ticket = session.select(Platform::YouTube);
        assert!(session.complete(ticket, Ok(rows(7))));
        match session.view() {
            GalleryView::Page {
                items,
                page,
                total_pages,
                total_items,
                ..
            } => {
                assert_eq!(items.len(), 5);
                assert_eq!(page, 1);
                assert_eq!(total_pages, 2);
                assert_eq!(total_items, 7);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = GallerySession::new();
        let slow = session.select(Platform::YouTube);
        let fast = session.select(Platform::Instagram);

        assert!(session.complete(fast, Ok(rows(2))));
        assert!(!session.complete(slow, Ok(rows(12))));

        match session.view() {
            GalleryView::Page {
                platform,
                total_items,
                ..
            } => {
                assert_eq!(platform, Platform::Instagram);
                assert_eq!(total_items, 2);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_reselecting_same_platform_invalidates_older_ticket() {
        let mut session = GallerySession::new();
        let first = session.select(Platform::TikTok);
        let second = session.select(Platform::TikTok);
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn test_response_after_close_is_discarded() {
        let mut session = GallerySession::new();
        let ticket = session.select(Platform::TikTok);
        session.close();
        assert!(!session.complete(ticket, Ok(rows(3))));
        assert_eq!(session.view(), GalleryView::Closed);
    }

    #[test]
    fn test_switching_platform_resets_page() {
        let mut session = GallerySession::new();
        let ticket = session.select(Platform::YouTube);
        session.complete(ticket, Ok(rows(12)));
        assert_eq!(session.go_to_page(3), 3);

        let ticket = session.select(Platform::TikTok);
        assert_eq!(session.current_page(), 1);
        session.complete(ticket, Ok(rows(2)));
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut session = GallerySession::new();
        let ticket = session.select(Platform::YouTube);
        session.complete(ticket, Ok(rows(12)));

        assert_eq!(session.go_to_page(99), 3);
        assert_eq!(session.go_to_page(-5), 1);

        let ticket = session.select(Platform::YouTube);
        session.complete(ticket, Ok(Vec::new()));
        assert_eq!(session.go_to_page(4), 1);
    }
}
