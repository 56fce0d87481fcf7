mod pages;
mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::components::{Decoration, NoDecoration, Starfield};
use crate::config::Config;
use crate::projects::ProjectSource;

pub use pages::{render_home, render_not_found};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectSource>,
    pub config: Arc<Config>,
    pub decoration: Arc<dyn Decoration>,
}

impl AppState {
    /// Build state from configuration, choosing the decorative layer.
    #[must_use]
    pub fn new(config: Config, projects: Arc<dyn ProjectSource>) -> Self {
        let decoration: Arc<dyn Decoration> = if config.decorations_enabled {
            Arc::new(Starfield::new(config.star_count))
        } else {
            Arc::new(NoDecoration)
        };

        Self {
            projects,
            config: Arc::new(config),
            decoration,
        }
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(state: AppState, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.web_host, state.config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/editor-portfolio/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/editor-portfolio/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
