//! Read access to the projects table.
//!
//! The gallery only ever reads rows. Rows are fetched in full per platform and
//! paginated in memory.

mod client;
mod models;

use async_trait::async_trait;
use thiserror::Error;

use crate::platforms::Platform;

pub use client::SupabaseProjects;
pub use models::{gallery_order, sort_projects, Project};

/// Message shown when the request itself could not complete.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects";

#[derive(Debug, Error)]
pub enum ProjectsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("projects API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("failed to decode projects response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid projects endpoint {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ProjectsError {
    /// Message suitable for showing to a visitor.
    ///
    /// API errors carry the database's own message; transport and decoding
    /// failures collapse to a generic one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            _ => LOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

/// A source of project rows.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetch every project for a platform, newest year first and then by
    /// manual order index.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn fetch_by_platform(&self, platform: Platform) -> Result<Vec<Project>, ProjectsError>;

    /// Fetch up to `limit` rows of any platform, used for connectivity checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn sample(&self, limit: usize) -> Result<Vec<Project>, ProjectsError>;
}
