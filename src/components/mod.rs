//! Maud HTML template components for the site.
//!
//! - `layout`: Base page skeleton and footer
//! - `decor`: Decorative background layers
//! - `alert`: Status and error messages
//! - `embed`: Platform video embeds and their third-party scripts
//! - `pagination`: Gallery page navigation
//! - `modal`: The per-platform gallery dialog
//!
//! # Example
//!
//! ```ignore
//! use maud::html;
//! use crate::components::{Alert, BaseLayout};
//!
//! let content = html! {
//!     h1 { "Hello World" }
//!     (Alert::info("No projects yet"))
//! };
//! let page = BaseLayout::new("Portfolio", "Jane Doe").render(content);
//! ```

pub mod alert;
pub mod decor;
pub mod embed;
pub mod layout;
pub mod modal;
pub mod pagination;

pub use alert::{Alert, AlertVariant};
pub use decor::{Decoration, NoDecoration, Starfield};
pub use embed::{EmbedScripts, VideoEmbed};
pub use layout::BaseLayout;
pub use modal::{gallery_url, PlatformModal, CLOSE_HREF};
pub use pagination::Pagination;

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
