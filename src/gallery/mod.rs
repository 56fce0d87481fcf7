//! Project gallery: pagination, per-visitor selection state, and the dialog
//! lifecycle.

mod dialog;
mod pagination;
mod session;

pub use dialog::{DialogAction, GalleryDialog, ScrollLock, Viewport, CLOSE_KEY};
pub use pagination::Paginator;
pub use session::{FetchState, FetchTicket, GallerySession, GalleryView};

pub use crate::constants::PAGE_SIZE;
