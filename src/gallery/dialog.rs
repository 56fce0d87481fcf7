//! Open/close lifecycle of the gallery dialog.
//!
//! While a dialog is open the page body must not scroll and the Escape key
//! must close it. Both are tied to the dialog's lifetime: opening acquires
//! them, dropping the dialog releases them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::session::GallerySession;
use crate::platforms::Platform;

/// Key that dismisses an open dialog.
pub const CLOSE_KEY: &str = "Escape";

/// The page body. Tracks outstanding scroll locks.
#[derive(Debug, Default, Clone)]
pub struct Viewport {
    scroll_locks: Arc<AtomicUsize>,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the body from scrolling until the returned guard is dropped.
    #[must_use]
    pub fn lock_scroll(&self) -> ScrollLock {
        self.scroll_locks.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            scroll_locks: Arc::clone(&self.scroll_locks),
        }
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks.load(Ordering::SeqCst) > 0
    }
}

/// Guard returned by [`Viewport::lock_scroll`].
#[derive(Debug)]
pub struct ScrollLock {
    scroll_locks: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self
            .scroll_locks
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

/// What a key press asks the dialog to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Close,
    Ignore,
}

/// An open gallery dialog for one platform.
#[derive(Debug)]
pub struct GalleryDialog {
    session: GallerySession,
    _scroll_lock: ScrollLock,
}

impl GalleryDialog {
    /// Open the dialog on `viewport`, locking its scroll for the dialog's
    /// lifetime.
    #[must_use]
    pub fn open(viewport: &Viewport) -> Self {
        Self {
            session: GallerySession::new(),
            _scroll_lock: viewport.lock_scroll(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GallerySession {
        &mut self.session
    }

    /// Platform currently shown, if one has been selected.
    #[must_use]
    pub fn platform(&self) -> Option<Platform> {
        self.session.selected()
    }

    /// Route a key press. Only [`CLOSE_KEY`] is handled.
    ///
    /// This is the dialog's key contract. The keydown listener rendered with
    /// the dialog is generated from [`CLOSE_KEY`] and must close on exactly
    /// the keys this returns [`DialogAction::Close`] for.
    #[must_use]
    pub fn on_key(&self, key: &str) -> DialogAction {
        if key == CLOSE_KEY {
            DialogAction::Close
        } else {
            DialogAction::Ignore
        }
    }

    /// Close the dialog, releasing the scroll lock and discarding any fetch
    /// still in flight.
    pub fn close(mut self) {
        self.session.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_released_on_drop() {
        let viewport = Viewport::new();
        assert!(!viewport.is_scroll_locked());

        let lock = viewport.lock_scroll();
        assert!(viewport.is_scroll_locked());
        drop(lock);
        assert!(!viewport.is_scroll_locked());
    }

    #[test]
    fn test_nested_locks() {
        let viewport = Viewport::new();
        let outer = viewport.lock_scroll();
        let inner = viewport.lock_scroll();
        drop(outer);
        assert!(viewport.is_scroll_locked());
        drop(inner);
        assert!(!viewport.is_scroll_locked());
    }

    #[test]
    fn test_dialog_holds_lock_until_closed() {
        let viewport = Viewport::new();
        let mut dialog = GalleryDialog::open(&viewport);
        dialog.session_mut().select(Platform::YouTube);
        assert!(viewport.is_scroll_locked());
        assert_eq!(dialog.platform(), Some(Platform::YouTube));

        dialog.close();
        assert!(!viewport.is_scroll_locked());
    }

    #[test]
    fn test_escape_closes() {
        let viewport = Viewport::new();
        let dialog = GalleryDialog::open(&viewport);
        assert_eq!(dialog.on_key("Escape"), DialogAction::Close);
        assert_eq!(dialog.on_key("Enter"), DialogAction::Ignore);
        assert_eq!(dialog.on_key("escape"), DialogAction::Ignore);
    }
}
